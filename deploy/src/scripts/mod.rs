use std::io::Write;

use crate::deployer::DeployEnvironment;
use crate::error::Result;

pub mod deploy_your_contract;

pub use deploy_your_contract::DeployYourContract;

/// A deployment task the runner can select by tag.
#[allow(async_fn_in_trait)]
pub trait DeployScript {
    fn name(&self) -> &'static str;

    fn tags(&self) -> &'static [&'static str];

    async fn run<E: DeployEnvironment>(&self, env: &E, out: &mut impl Write) -> Result<()>;
}

/// An empty filter selects every script.
pub fn is_selected(tags: &[&str], filter: &[String]) -> bool {
    filter.is_empty() || filter.iter().any(|wanted| tags.contains(&wanted.as_str()))
}

/// Runs `script` if `filter` selects it, returning whether it ran.
pub async fn run_script<E, S>(
    env: &E,
    script: &S,
    filter: &[String],
    out: &mut impl Write,
) -> Result<bool>
where
    E: DeployEnvironment,
    S: DeployScript,
{
    if !is_selected(script.tags(), filter) {
        log::info!("skipping {}, tags {:?} not in {:?}", script.name(), script.tags(), filter);
        return Ok(false);
    }
    log::debug!("running {}", script.name());
    script.run(env, out).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_filter_selects_all() {
        assert!(is_selected(&["token"], &[]));
        assert!(is_selected(&[], &[]));
    }

    #[test]
    fn test_filter_matches_any_tag() {
        assert!(is_selected(&["token", "core"], &filter(&["core"])));
        assert!(is_selected(&["token"], &filter(&["other", "token"])));
        assert!(!is_selected(&["token"], &filter(&["other"])));
        assert!(!is_selected(&[], &filter(&["token"])));
    }

    #[test]
    fn test_filter_is_exact() {
        assert!(!is_selected(&["Token"], &filter(&["token"])));
        assert!(!is_selected(&["token"], &filter(&["tok"])));
    }
}
