use tdl::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
