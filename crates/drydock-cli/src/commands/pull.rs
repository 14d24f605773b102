use drydock_core::Overrides;

use super::TaskContext;

pub async fn pull(ctx: &TaskContext, tag: &str) -> anyhow::Result<()> {
    let mut overrides = Overrides::new();
    overrides.insert("remote".to_owned(), true.into());
    overrides.insert("tag".to_owned(), tag.into());

    let cfg = ctx.resolve(overrides)?;
    let outcome = ctx.tasks().pull(&cfg).await?;
    super::echo(&outcome);

    Ok(())
}
