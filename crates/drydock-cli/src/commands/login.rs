use drydock_core::Overrides;

use super::TaskContext;

/// Log in to the registry. Forces a remote configuration, so incomplete
/// credentials fail here instead of halfway through a pull or push.
pub async fn login(ctx: &TaskContext) -> anyhow::Result<()> {
    let mut overrides = Overrides::new();
    overrides.insert("remote".to_owned(), true.into());

    let cfg = ctx.resolve(overrides)?;
    let outcome = ctx.tasks().login(&cfg).await?;
    super::echo(&outcome);

    Ok(())
}
