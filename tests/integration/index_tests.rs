//! Integration tests for the index backends
//!
//! These tests drive both backends through the public contract, check that
//! they agree exactly, and run the crawl-then-index pipeline against a
//! wiremock site.

use ripple_search::config::{load_config, BackendKind, IndexConfig};
use ripple_search::crawler::Coordinator;
use ripple_search::index::{open_index, Hit, InMemoryIndex, SearchIndex, SqliteIndex};
use ripple_search::output::hits_to_json;
use ripple_search::Stopwords;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// A small corpus with repeated terms, stopwords and a duplicate add
fn corpus() -> Vec<(&'static str, &'static str)> {
    vec![
        ("http://lit.test/moby/1", "Call me Ishmael the whale the sea"),
        ("http://lit.test/moby/2", "whale whale whale Ahab hunted whales"),
        ("http://lit.test/romeo/1", "Romeo loves Juliet and Juliet loves Romeo"),
        ("http://lit.test/dracula/1", "the Count sleeps in his castle by the sea"),
        ("http://lit.test/empty", "the and of to"),
        ("http://lit.test/moby/1", "a second add of the same url is ignored"),
        ("http://lit.test/romeo/2", "Romeo Romeo wherefore art thou Romeo"),
    ]
}

fn fill(index: &mut dyn SearchIndex) {
    for (url, text) in corpus() {
        index.add_document(url, &words(text)).unwrap();
    }
}

fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_backends_return_identical_results() {
    let mut memory = InMemoryIndex::new(Stopwords::default());
    let mut sqlite = SqliteIndex::new_in_memory(Stopwords::default()).unwrap();
    fill(&mut memory);
    fill(&mut sqlite);

    assert_eq!(memory.document_count().unwrap(), 6);
    assert_eq!(sqlite.document_count().unwrap(), 6);
    assert_eq!(memory.stats().unwrap(), sqlite.stats().unwrap());

    for term in [
        "whale", "Whales", "sea", "romeo", "juliet", "count", "the", "", "kraken", "loving",
    ] {
        let a = memory.search(term).unwrap();
        let b = sqlite.search(term).unwrap();
        assert_eq!(a, b, "backends disagree on {:?}", term);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.score.to_bits(), y.score.to_bits());
        }
    }
}

#[test]
fn test_tf_idf_values() {
    let mut index = InMemoryIndex::default();
    fill(&mut index);

    // "sea" appears in moby/1 (len 4: call ishmael whale sea) and dracula/1
    // (len 4: count sleep castl sea) out of N = 6
    let hits = index.search("sea").unwrap();
    let idf = (6f64 / 2.0).ln();
    assert_eq!(
        hits,
        vec![
            Hit {
                url: "http://lit.test/dracula/1".to_string(),
                score: (1.0 / 4.0) * idf,
            },
            Hit {
                url: "http://lit.test/moby/1".to_string(),
                score: (1.0 / 4.0) * idf,
            },
        ]
    );
}

#[test]
fn test_ranking_is_strict() {
    let mut index = SqliteIndex::new_in_memory(Stopwords::default()).unwrap();
    fill(&mut index);

    for term in ["whale", "romeo", "sea", "love"] {
        let hits = index.search(term).unwrap();
        for pair in hits.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.score > b.score || (a.score == b.score && a.url < b.url),
                "{:?} should sort before {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_whale_scenario_on_both_backends() {
    let backends: Vec<Box<dyn SearchIndex>> = vec![
        Box::new(InMemoryIndex::default()),
        Box::new(SqliteIndex::new_in_memory(Stopwords::default()).unwrap()),
    ];

    for mut index in backends {
        index
            .add_document("doc1", &words("whale whale ship and the"))
            .unwrap();
        index.add_document("doc2", &words("harbor")).unwrap();

        assert!(index.search("the").unwrap().is_empty());

        let hits = index.search("whale").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "doc1");
        assert!(hits[0].score > 0.0);

        index.close().unwrap();
    }
}

#[test]
fn test_idempotent_add_across_backends() {
    let backends: Vec<Box<dyn SearchIndex>> = vec![
        Box::new(InMemoryIndex::default()),
        Box::new(SqliteIndex::new_in_memory(Stopwords::default()).unwrap()),
    ];

    for mut index in backends {
        index.add_document("u", &words("whale ship sea")).unwrap();
        let stats = index.stats().unwrap();
        let hits = index.search("ship").unwrap();

        index.add_document("u", &words("whale ship sea")).unwrap();
        index.add_document("u", &words("other words")).unwrap();

        assert_eq!(index.document_count().unwrap(), 1);
        assert_eq!(index.stats().unwrap(), stats);
        assert_eq!(index.search("ship").unwrap(), hits);
    }
}

#[test]
fn test_custom_stopwords_injected() {
    let stopwords = Stopwords::from_words(["whale"]);
    let mut memory = InMemoryIndex::new(stopwords.clone());
    let mut sqlite = SqliteIndex::new_in_memory(stopwords).unwrap();

    let backends: [&mut dyn SearchIndex; 2] = [&mut memory, &mut sqlite];
    for index in backends {
        index.add_document("a", &words("whale the")).unwrap();
        index.add_document("b", &words("ship")).unwrap();
        assert!(index.search("whale").unwrap().is_empty());
        assert_eq!(index.search("the").unwrap().len(), 1);
    }
}

#[test]
fn test_persisted_index_survives_reopen() {
    let dir = tempdir().unwrap();
    let config = IndexConfig {
        backend: BackendKind::Persisted,
        database_path: Some(dir.path().join("index.db").to_string_lossy().to_string()),
    };

    let mut index = open_index(&config, Stopwords::default()).unwrap();
    fill(index.as_mut());
    let before = index.search("whale").unwrap();
    index.close().unwrap();

    let mut index = open_index(&config, Stopwords::default()).unwrap();
    assert_eq!(index.document_count().unwrap(), 6);
    assert_eq!(index.search("whale").unwrap(), before);

    index
        .add_document("http://lit.test/moby/2", &words("nothing changes"))
        .unwrap();
    assert_eq!(index.document_count().unwrap(), 6);
    index.close().unwrap();
}

#[test]
fn test_search_results_as_json() {
    let mut index = InMemoryIndex::default();
    index.add_document("http://x/a", &words("whale ship")).unwrap();
    index.add_document("http://x/b", &words("ship")).unwrap();

    let json = hits_to_json(&index.search("whale").unwrap()).unwrap();
    assert!(json.starts_with(r#"[{"URL":"http://x/a","Score":"#));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let score = value[0]["Score"].as_f64().unwrap();
    assert!((score - 0.5 * 2f64.ln()).abs() < 1e-12);

    assert_eq!(hits_to_json(&index.search("the").unwrap()).unwrap(), "[]");
    assert_eq!(hits_to_json(&index.search("").unwrap()).unwrap(), "[]");
}

async fn mount_text(server: &MockServer, route: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Serves a table of contents linking to pages from three works
async fn mount_library(server: &MockServer) {
    mount_text(
        server,
        "/",
        r#"<html><body><h1>Library</h1>
        <a href="/romeo/act1">Romeo and Juliet, Act 1</a>
        <a href="/romeo/act2">Romeo and Juliet, Act 2</a>
        <a href="/dracula/ch1">Dracula, Chapter 1</a>
        <a href="/moby/ch1">Moby Dick, Chapter 1</a>
        </body></html>"#,
    )
    .await;
    mount_text(
        server,
        "/romeo/act1",
        "<p>Enter Romeo. O Romeo, Romeo! Two households, both alike in dignity.</p>",
    )
    .await;
    mount_text(
        server,
        "/romeo/act2",
        "<p>But soft, what light through yonder window breaks? It is the east, and Juliet is the sun. Romeo speaks.</p>",
    )
    .await;
    mount_text(
        server,
        "/dracula/ch1",
        "<p>Left Munich at 8:35 P.M. The Count welcomed me to his castle in Transylvania.</p><style>.romeo{}</style>",
    )
    .await;
    mount_text(
        server,
        "/moby/ch1",
        "<p>Call me Ishmael. Some years ago I thought I would sail about and see the watery part of the world.</p><script>var romeo = 1;</script>",
    )
    .await;
}

fn library_config(start: &str, backend: &str, extra: &str) -> NamedTempFile {
    create_temp_file(&format!(
        r#"
[crawler]
start-url = "{start}"
max-pages = 20

[user-agent]
crawler-name = "TestBot"
crawler-version = "1.0.0"

[index]
backend = "{backend}"
{extra}
"#
    ))
}

#[tokio::test]
async fn test_literature_corpus_ranking() {
    let mock_server = MockServer::start().await;
    mount_library(&mock_server).await;
    let base_url = mock_server.uri();

    let file = library_config(&format!("{}/", base_url), "in-memory", "");
    let config = load_config(file.path()).unwrap();
    let mut coordinator = Coordinator::from_config(config).unwrap();

    let summary = coordinator.run().await.unwrap();
    assert_eq!(summary.pages_crawled, 5);
    assert_eq!(summary.pages_indexed, 5);
    assert_eq!(summary.pages_failed, 0);

    // The index page mentions Romeo in its link text too
    let hits = coordinator.search("Romeo").unwrap();
    let urls: Vec<&str> = hits.iter().map(|h| h.url.as_str()).collect();
    assert_eq!(urls.len(), 3);
    assert_eq!(urls[0], format!("{}/romeo/act1", base_url));
    assert!(urls.contains(&format!("{}/romeo/act2", base_url).as_str()));
    for excluded in ["/dracula/ch1", "/moby/ch1"] {
        assert!(!urls.contains(&format!("{}{}", base_url, excluded).as_str()));
    }

    let hits = coordinator.search("transylvania").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, format!("{}/dracula/ch1", base_url));

    let hits = coordinator.search("Ishmael").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, format!("{}/moby/ch1", base_url));
}

#[tokio::test]
async fn test_persisted_pipeline_continues_across_runs() {
    let mock_server = MockServer::start().await;
    mount_library(&mock_server).await;
    let base_url = mock_server.uri();

    let dir = tempdir().unwrap();
    let db_path = dir.path().join("library.db");
    let extra = format!("database-path = \"{}\"", db_path.display());
    let file = library_config(&format!("{}/", base_url), "persisted", &extra);

    let first = {
        let mut coordinator = Coordinator::from_config(load_config(file.path()).unwrap()).unwrap();
        coordinator.run().await.unwrap();
        let hits = coordinator.search("juliet").unwrap();
        coordinator.into_index().close().unwrap();
        hits
    };
    assert!(!first.is_empty());

    let mut coordinator = Coordinator::from_config(load_config(file.path()).unwrap()).unwrap();
    let summary = coordinator.run().await.unwrap();
    assert_eq!(summary.pages_indexed, 5);
    assert_eq!(coordinator.index().document_count().unwrap(), 5);
    assert_eq!(coordinator.search("juliet").unwrap(), first);
    coordinator.into_index().close().unwrap();
}

#[tokio::test]
async fn test_failed_pages_not_indexed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_text(
        &mock_server,
        "/",
        r#"<p>home</p><a href="/gone">gone</a><a href="/here">here</a>"#,
    )
    .await;
    mount_text(&mock_server, "/here", "<p>whale</p>").await;

    let file = library_config(&format!("{}/", base_url), "in-memory", "");
    let mut coordinator = Coordinator::from_config(load_config(file.path()).unwrap()).unwrap();
    let summary = coordinator.run().await.unwrap();

    assert_eq!(summary.pages_crawled, 3);
    assert_eq!(summary.pages_indexed, 2);
    assert_eq!(summary.pages_failed, 1);
    assert_eq!(coordinator.index().document_count().unwrap(), 2);
}
