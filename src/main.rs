fn main() -> anyhow::Result<()> {
    heartbeats_lib::run()
}
