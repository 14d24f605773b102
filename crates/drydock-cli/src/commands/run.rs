use drydock_core::Overrides;

use super::TaskContext;

pub async fn run(ctx: &TaskContext, remote: bool, tag: &str, command: &str) -> anyhow::Result<()> {
    let mut overrides = Overrides::new();
    overrides.insert("remote".to_owned(), remote.into());
    overrides.insert("tag".to_owned(), tag.into());
    overrides.insert("command".to_owned(), command.into());

    let cfg = ctx.resolve(overrides)?;
    let outcome = ctx.tasks().run(&cfg).await?;
    super::echo(&outcome);

    Ok(())
}
