use std::str::FromStr;

use clap::ArgMatches;

use airis_runtime::{token_budget, Complexity, ConfidenceRequest, ConfidenceScorer, Signal};

pub async fn run(matches: &ArgMatches) {
    let task = matches.get_one::<String>("task").unwrap();
    let complexity = match Complexity::from_str(matches.get_one::<String>("complexity").unwrap()) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let request = ConfidenceRequest::new(task.clone())
        .with_complexity(complexity)
        .with_signal(
            Signal::DuplicateCheckComplete,
            matches.get_flag("duplicate-check"),
        )
        .with_signal(
            Signal::ArchitectureCheckComplete,
            matches.get_flag("architecture-check"),
        )
        .with_signal(Signal::OfficialDocsVerified, matches.get_flag("docs-verified"))
        .with_signal(Signal::OssReferenceComplete, matches.get_flag("oss-reference"))
        .with_signal(Signal::RootCauseIdentified, matches.get_flag("root-cause"))
        .with_signal(Signal::HasOfficialDocs, matches.get_flag("has-docs"))
        .with_signal(Signal::HasSimilarExamples, matches.get_flag("has-examples"));

    let scorer = ConfidenceScorer::default();
    match scorer.assess(&request) {
        Ok(response) => {
            let json = serde_json::to_string_pretty(&response)
                .unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
            eprintln!(
                "Token budget for a {} task: {} tokens",
                complexity,
                token_budget(complexity)
            );
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
