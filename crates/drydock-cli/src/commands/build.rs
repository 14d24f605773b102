use drydock_core::Overrides;

use super::TaskContext;

pub async fn build(ctx: &TaskContext, remote: bool, tag: &str, no_cache: bool) -> anyhow::Result<()> {
    let mut overrides = Overrides::new();
    overrides.insert("remote".to_owned(), remote.into());
    overrides.insert("tag".to_owned(), tag.into());
    overrides.insert("no_cache".to_owned(), no_cache.into());

    let cfg = ctx.resolve(overrides)?;
    let outcome = ctx.tasks().build(&cfg).await?;
    super::echo(&outcome);

    Ok(())
}
