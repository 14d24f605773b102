use drydock_core::Overrides;

use super::TaskContext;

/// The publish pipeline: build with a cold cache against the remote image
/// name, then push. Login happens inside the push.
pub async fn release(ctx: &TaskContext, tag: &str) -> anyhow::Result<()> {
    let mut overrides = Overrides::new();
    overrides.insert("remote".to_owned(), true.into());
    overrides.insert("no_cache".to_owned(), true.into());
    overrides.insert("tag".to_owned(), tag.into());

    let cfg = ctx.resolve(overrides)?;
    let tasks = ctx.tasks();

    let built = tasks.build(&cfg).await?;
    super::echo(&built);

    let pushed = tasks.push(&cfg).await?;
    super::echo(&pushed);

    println!("Released '{}'", cfg.image);
    Ok(())
}
