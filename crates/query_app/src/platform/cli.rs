use clap::Parser;
use query_core::QueryOption;
use query_engine::{parse_base_url, DEFAULT_BASE_URL};
use url::Url;

use super::logging::LogDestination;

/// Pick a backend query and run it.
#[derive(Debug, Parser)]
#[command(name = "query_menu", version)]
pub struct Args {
    /// Address of the backend; the option id is appended as a path segment.
    #[arg(
        long,
        env = "QUERY_MENU_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        value_parser = parse_base_url
    )]
    pub base_url: Url,

    /// Run this query without opening a window and print the result.
    #[arg(long, value_name = "ID")]
    pub option: Option<QueryOption>,

    /// Where log records go.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_window_mode_against_local_backend() {
        let args = Args::try_parse_from(["query_menu"]).unwrap();

        assert_eq!(args.base_url.as_str(), "http://localhost:5000/");
        assert_eq!(args.option, None);
        assert_eq!(args.log, LogDestination::File);
    }

    #[test]
    fn parses_headless_option_and_base_url() {
        let args = Args::try_parse_from([
            "query_menu",
            "--base-url",
            "http://10.0.0.5:8080/api/",
            "--option",
            "salidasNoConformes",
            "--log",
            "both",
        ])
        .unwrap();

        assert_eq!(args.base_url.as_str(), "http://10.0.0.5:8080/api/");
        assert_eq!(args.option, Some(QueryOption::SalidasNoConformes));
        assert_eq!(args.log, LogDestination::Both);
    }

    #[test]
    fn rejects_unknown_option() {
        assert!(Args::try_parse_from(["query_menu", "--option", "auditoria"]).is_err());
    }

    #[test]
    fn rejects_base_url_without_path() {
        for raw in ["mailto:ops@example.com", "not a url"] {
            assert!(Args::try_parse_from(["query_menu", "--base-url", raw]).is_err());
        }
    }
}
