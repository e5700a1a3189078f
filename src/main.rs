fn main() -> anyhow::Result<()> {
    layerglow::run()?;
    Ok(())
}
