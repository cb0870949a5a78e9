fn main() -> anyhow::Result<()> {
    cpdrkit::cli::run_cli()
}
