//! CLI command execution

use super::commands::{Cli, Commands, OutputFormat};
use crate::coordinate::{CoordinateSpec, StampTime};
use crate::error::{Error, Result};
use crate::pagination;
use crate::params::{names, resolve, RequestParams};
use crate::provider::{BuiltinProvider, FileProvider};
use crate::token::{CanonicalToken, TokenRegistry};
use serde_json::json;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for a parsed command line
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command, returning the process exit code
    pub fn run(&self) -> Result<i32> {
        let registry = self.registry()?;

        match &self.cli.command {
            Commands::Mint { .. } => {
                let token = resolve(&self.mint_params(), &registry)?;
                self.print_token(&token)?;
                Ok(0)
            }
            Commands::Inspect { token } => {
                let token = registry.get_or_create_str(token)?;
                self.print_token(&token)?;
                Ok(0)
            }
            Commands::Diff { left, right } => {
                let left = registry.get_or_create_str(left)?;
                let right = registry.get_or_create_str(right)?;
                self.print_diff(&left, &right)?;
                Ok(i32::from(!left.same_instance(&right)))
            }
            Commands::Paginate {
                page_num,
                max_page_size,
                approximate_total,
                result_count,
                base_url,
            } => {
                url::Url::parse(base_url).map_err(|e| {
                    Error::parameter("base-url", base_url.clone(), e.to_string())
                })?;
                let pagination = pagination::paginate(
                    *page_num,
                    *max_page_size,
                    *approximate_total,
                    *result_count,
                    base_url,
                )?;
                match self.cli.format {
                    OutputFormat::Text => {
                        println!("page:     {}", pagination.page_num);
                        println!("total:    {}", describe_total(pagination.approximate_total));
                        println!("previous: {}", pagination.previous_url);
                        println!("next:     {}", pagination.next_url);
                    }
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&pagination)?);
                    }
                }
                Ok(0)
            }
        }
    }

    fn registry(&self) -> Result<TokenRegistry> {
        match &self.cli.defaults {
            Some(path) => TokenRegistry::from_provider(&FileProvider::new(path)),
            None => TokenRegistry::from_provider(&BuiltinProvider),
        }
    }

    /// Map the mint flags onto the request parameters they mirror
    fn mint_params(&self) -> RequestParams {
        let Commands::Mint {
            token,
            time,
            path,
            precedence,
            modules,
            allowed_states,
            language,
            dialect_prefs,
            description_type_prefs,
            logic_stated_assemblage,
            logic_inferred_assemblage,
            description_logic_profile,
            classifier,
            stated,
        } = &self.cli.command
        else {
            return RequestParams::new();
        };

        let flags = [
            (names::COORD_TOKEN, token),
            (names::TIME, time),
            (names::PATH, path),
            (names::PRECEDENCE, precedence),
            (names::MODULES, modules),
            (names::ALLOWED_STATES, allowed_states),
            (names::LANGUAGE, language),
            (names::DIALECT_PREFS, dialect_prefs),
            (names::DESCRIPTION_TYPE_PREFS, description_type_prefs),
            (names::LOGIC_STATED_ASSEMBLAGE, logic_stated_assemblage),
            (names::LOGIC_INFERRED_ASSEMBLAGE, logic_inferred_assemblage),
            (names::DESCRIPTION_LOGIC_PROFILE, description_logic_profile),
            (names::CLASSIFIER, classifier),
            (names::STATED, stated),
        ];

        let mut params = RequestParams::new();
        for (name, value) in flags {
            if let Some(value) = value {
                params.set(name, value);
            }
        }
        params
    }

    fn print_token(&self, token: &CanonicalToken) -> Result<()> {
        match self.cli.format {
            OutputFormat::Text => {
                println!("token: {}", token.serialized());
                print!("{}", describe_spec(token.spec()));
            }
            OutputFormat::Json => {
                let record = json!({
                    "token": token.serialized(),
                    "coordinates": token.spec(),
                });
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
        }
        Ok(())
    }

    fn print_diff(&self, left: &CanonicalToken, right: &CanonicalToken) -> Result<()> {
        let differences = diff_components(left.spec(), right.spec());
        match self.cli.format {
            OutputFormat::Text => {
                if differences.is_empty() {
                    println!("tokens are equivalent");
                } else {
                    for component in &differences {
                        println!("differs: {component}");
                    }
                }
            }
            OutputFormat::Json => {
                let record = json!({
                    "equivalent": differences.is_empty(),
                    "differing_components": differences,
                });
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
        }
        Ok(())
    }
}

/// Names of the top-level components on which two specs differ
fn diff_components(left: &CoordinateSpec, right: &CoordinateSpec) -> Vec<&'static str> {
    let mut differences = Vec::new();
    if left.stamp != right.stamp {
        differences.push("stamp");
    }
    if left.language != right.language {
        differences.push("language");
    }
    if left.logic != right.logic {
        differences.push("logic");
    }
    if left.premise != right.premise {
        differences.push("premise");
    }
    differences
}

fn describe_spec(spec: &CoordinateSpec) -> String {
    let mut out = String::new();
    out.push_str(&format!("stamp:\n  time: {}\n", describe_time(spec.stamp.time)));
    out.push_str(&format!("  path: {}\n", spec.stamp.path_id));
    out.push_str(&format!("  precedence: {}\n", spec.stamp.precedence));
    out.push_str(&format!("  modules: {}\n", describe_ids(spec.stamp.modules.iter())));
    out.push_str(&format!(
        "  allowed states: {}\n",
        spec.stamp
            .allowed_states
            .iter()
            .map(|s| s.name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    out.push_str(&format!("language:\n  language: {}\n", spec.language.language_id));
    out.push_str(&format!(
        "  dialect prefs: {}\n",
        describe_ids(spec.language.dialect_prefs.iter())
    ));
    out.push_str(&format!(
        "  description type prefs: {}\n",
        describe_ids(spec.language.description_type_prefs.iter())
    ));
    out.push_str(&format!(
        "logic:\n  stated assemblage: {}\n  inferred assemblage: {}\n  description profile: {}\n  classifier: {}\n",
        spec.logic.stated_assemblage_id,
        spec.logic.inferred_assemblage_id,
        spec.logic.description_profile_id,
        spec.logic.classifier_id
    ));
    out.push_str(&format!("premise: {}\n", spec.premise));
    out
}

fn describe_total(approximate_total: i64) -> String {
    if approximate_total < 0 {
        "unknown".to_string()
    } else {
        approximate_total.to_string()
    }
}

fn describe_time(time: StampTime) -> String {
    match time {
        StampTime::Latest => "latest".to_string(),
        StampTime::At(millis) => match chrono::DateTime::from_timestamp_millis(millis) {
            Some(instant) => format!("{millis} ({})", instant.to_rfc3339()),
            None => millis.to_string(),
        },
    }
}

fn describe_ids<'a>(ids: impl Iterator<Item = &'a u32>) -> String {
    let rendered: Vec<String> = ids.map(ToString::to_string).collect();
    if rendered.is_empty() {
        "(none)".to_string()
    } else {
        rendered.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_defaults;

    #[test]
    fn test_diff_components() {
        let base = builtin_defaults();
        assert!(diff_components(&base, &base).is_empty());

        let mut changed = base.clone();
        changed.stamp.path_id = 9;
        changed.premise = crate::coordinate::PremiseType::Inferred;
        assert_eq!(diff_components(&base, &changed), vec!["stamp", "premise"]);
    }

    #[test]
    fn test_describe_time_renders_instant() {
        assert_eq!(describe_time(StampTime::Latest), "latest");
        let rendered = describe_time(StampTime::At(0));
        assert!(rendered.starts_with("0 (1970-01-01"));
    }

    #[test]
    fn test_describe_spec_mentions_every_component() {
        let text = describe_spec(&builtin_defaults());
        for heading in ["stamp:", "language:", "logic:", "premise:"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("modules: (none)"));
    }
}
