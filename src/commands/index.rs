use std::str::FromStr;

use clap::ArgMatches;

use airis_runtime::{generate_repo_index, IndexMode, RepoIndexRequest};

pub async fn run(matches: &ArgMatches) {
    let repo_path = matches.get_one::<String>("repo_path").unwrap();
    let mode = match IndexMode::from_str(matches.get_one::<String>("mode").unwrap()) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut request = RepoIndexRequest::new(repo_path)
        .with_mode(mode)
        .with_max_entries(*matches.get_one::<usize>("max-entries").unwrap());
    request.include_docs = !matches.get_flag("skip-docs");
    request.include_tests = !matches.get_flag("skip-tests");
    if let Some(output_dir) = matches.get_one::<String>("output-dir") {
        request = request.with_output_dir(output_dir);
    }

    match generate_repo_index(&request) {
        Ok(response) => {
            if response.output_paths.is_empty() {
                println!("{}", response.markdown);
            } else {
                for path in &response.output_paths {
                    println!("✅ Wrote {}", path.display());
                }
            }
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
