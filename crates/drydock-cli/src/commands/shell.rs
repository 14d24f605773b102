use drydock_core::Overrides;

use super::TaskContext;

pub async fn shell(ctx: &TaskContext, remote: bool, tag: &str) -> anyhow::Result<()> {
    let mut overrides = Overrides::new();
    overrides.insert("remote".to_owned(), remote.into());
    overrides.insert("tag".to_owned(), tag.into());

    let cfg = ctx.resolve(overrides)?;
    ctx.tasks().shell(&cfg).await?;

    Ok(())
}
