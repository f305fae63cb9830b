use clap::ArgMatches;

use airis_runtime::{plan_research, ResearchDepth, ResearchRequest};

pub async fn run(matches: &ArgMatches) {
    let query = matches.get_one::<String>("query").unwrap();
    let mut request = ResearchRequest::new(query.clone())
        .with_depth(ResearchDepth::parse(matches.get_one::<String>("depth").unwrap()));

    if let Some(constraints) = matches.get_many::<String>("constraint") {
        request.constraints = constraints.cloned().collect();
    }
    if let Some(seeds) = matches.get_many::<String>("seed") {
        request.seed_sources = seeds.cloned().collect();
    }

    let response = plan_research(&request);
    let json = serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}
