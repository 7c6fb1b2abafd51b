//! One-shot console mode: run a single query and print what the form would show.

use anyhow::bail;
use query_core::{update, AppState, Msg, QueryOption, QueryPhase};
use query_engine::QuerySettings;
use url::Url;

use super::effects::EffectRunner;

/// Returns whether the query succeeded.
pub fn run_once(base_url: Url, option: QueryOption) -> anyhow::Result<bool> {
    let mut runner = EffectRunner::new(QuerySettings::new(base_url))?;

    let (state, _) = update(AppState::new(), Msg::OptionSelected(option));
    let (mut state, effects) = update(state, Msg::QueryClicked);
    runner.enqueue(effects);

    while state.is_loading() {
        let Some(msg) = runner.wait() else {
            bail!("query engine stopped before {} answered", option.id());
        };
        (state, _) = update(state, msg);
    }

    println!("{}", state.message());
    Ok(state.view().phase == QueryPhase::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine::parse_base_url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn run_blocking(base_url: Url, option: QueryOption) -> bool {
        tokio::task::spawn_blocking(move || run_once(base_url, option))
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn succeeds_only_when_backend_answers_200() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/indicadores"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"message":"done"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/riesgos"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let base = parse_base_url(&server.uri()).unwrap();

        assert!(run_blocking(base.clone(), QueryOption::Indicadores).await);
        assert!(!run_blocking(base, QueryOption::Riesgos).await);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fails_when_backend_is_unreachable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = parse_base_url(&format!("http://{addr}")).unwrap();

        assert!(!run_blocking(base, QueryOption::Documentos).await);
    }
}
