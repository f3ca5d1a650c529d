//! Wikidata + Wikipedia backend.
//!
//! - Redirects and topic tags come from the Wikipedia action API
//!   (`action=query`, `formatversion=2`).
//! - Instance-of (`P31`) and subclass-of (`P279`) claims come from
//!   `wbgetentities`.
//! - The transitive closure for the offline builder comes from the SPARQL
//!   endpoint (`wdt:P279*`).

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::RemoteConfig;
use crate::error::AppError;
use crate::knowledge::{KnowledgeGraph, RetryPolicy, TagSource, TopicTags};
use crate::models::{CanonicalTitle, ClassId, ClassList};

const INSTANCE_OF: &str = "P31";
const SUBCLASS_OF: &str = "P279";

/// HTTP client for the public Wikimedia APIs.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct WikidataClient {
    http: Client,
    wikidata_api: String,
    wikipedia_api: String,
    sparql_endpoint: String,
    site: String,
    retry: RetryPolicy,
}

impl WikidataClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            wikidata_api: config.wikidata_api.clone(),
            wikipedia_api: config.wikipedia_api.clone(),
            sparql_endpoint: config.sparql_endpoint.clone(),
            site: config.site.clone(),
            retry: RetryPolicy::exponential(config),
        })
    }

    /// Replace the retry policy (the offline builder uses a linear one).
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn get_json<T>(
        &self,
        url: &str,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let http = &self.http;
        self.retry
            .run(endpoint, move || async move {
                let response = http
                    .get(url)
                    .header(ACCEPT, "application/sparql-results+json, application/json")
                    .query(params)
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(AppError::RemoteStatus {
                        endpoint: endpoint.to_string(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.json::<T>().await?)
            })
            .await
    }

    async fn query_pages(
        &self,
        titles: &[CanonicalTitle],
        extra: &[(&str, String)],
    ) -> Result<QueryResponse, AppError> {
        let mut params = vec![
            ("action", "query".to_string()),
            ("format", "json".to_string()),
            ("formatversion", "2".to_string()),
            ("redirects", "1".to_string()),
            ("titles", join_titles(titles)),
        ];
        params.extend(extra.iter().cloned());
        self.get_json(&self.wikipedia_api, "wikipedia:query", &params)
            .await
    }

    async fn get_entities(
        &self,
        mut params: Vec<(&str, String)>,
    ) -> Result<EntitiesResponse, AppError> {
        params.push(("action", "wbgetentities".to_string()));
        params.push(("format", "json".to_string()));
        self.get_json(&self.wikidata_api, "wikidata:wbgetentities", &params)
            .await
    }
}

#[async_trait]
impl KnowledgeGraph for WikidataClient {
    async fn redirects(
        &self,
        titles: &[CanonicalTitle],
    ) -> Result<HashMap<CanonicalTitle, CanonicalTitle>, AppError> {
        if titles.is_empty() {
            return Ok(HashMap::new());
        }
        let response = self.query_pages(titles, &[]).await?;
        Ok(parse_redirects(titles, &response))
    }

    async fn instance_classes(
        &self,
        titles: &[CanonicalTitle],
    ) -> Result<HashMap<CanonicalTitle, ClassList>, AppError> {
        if titles.is_empty() {
            return Ok(HashMap::new());
        }
        let response = self
            .get_entities(vec![
                ("sites", self.site.clone()),
                ("titles", join_titles(titles)),
                ("props", "claims|sitelinks".to_string()),
                ("sitefilter", self.site.clone()),
            ])
            .await?;
        Ok(parse_instance_classes(titles, &response, &self.site))
    }

    async fn parent_classes(
        &self,
        classes: &[ClassId],
    ) -> Result<HashMap<ClassId, Vec<ClassId>>, AppError> {
        if classes.is_empty() {
            return Ok(HashMap::new());
        }
        let ids = classes
            .iter()
            .map(ClassId::as_str)
            .collect::<Vec<_>>()
            .join("|");
        let response = self
            .get_entities(vec![("ids", ids), ("props", "claims".to_string())])
            .await?;
        Ok(parse_parent_classes(classes, &response))
    }

    async fn descendants(&self, root: &ClassId, limit: u32) -> Result<Vec<ClassId>, AppError> {
        let query = closure_query(root, limit);
        let response: SparqlResponse = self
            .get_json(
                &self.sparql_endpoint,
                "wikidata:sparql",
                &[("query", query), ("format", "json".to_string())],
            )
            .await?;
        Ok(parse_bindings(&response))
    }
}

#[async_trait]
impl TagSource for WikidataClient {
    async fn tags(
        &self,
        titles: &[CanonicalTitle],
    ) -> Result<HashMap<CanonicalTitle, TopicTags>, AppError> {
        if titles.is_empty() {
            return Ok(HashMap::new());
        }
        let response = self
            .query_pages(
                titles,
                &[
                    ("prop", "categories".to_string()),
                    ("clshow", "!hidden".to_string()),
                    ("cllimit", "max".to_string()),
                ],
            )
            .await?;
        Ok(parse_tags(titles, &response))
    }
}

// ----------------------------------------------------------------------------
// Wire types
// ----------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: QueryBody,
}

#[derive(Debug, Default, Deserialize)]
struct QueryBody {
    #[serde(default)]
    normalized: Vec<TitleMapping>,
    #[serde(default)]
    redirects: Vec<TitleMapping>,
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct TitleMapping {
    from: String,
    to: String,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    categories: Vec<PageCategory>,
}

#[derive(Debug, Deserialize)]
struct PageCategory {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct EntitiesResponse {
    #[serde(default)]
    entities: HashMap<String, Entity>,
}

#[derive(Debug, Deserialize)]
struct Entity {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    missing: Option<serde_json::Value>,
    #[serde(default)]
    claims: HashMap<String, Vec<Claim>>,
    #[serde(default)]
    sitelinks: HashMap<String, Sitelink>,
}

#[derive(Debug, Deserialize)]
struct Claim {
    mainsnak: Snak,
    #[serde(default)]
    rank: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snak {
    #[serde(default)]
    datavalue: Option<DataValue>,
}

#[derive(Debug, Deserialize)]
struct DataValue {
    value: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct Sitelink {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct SparqlResponse {
    #[serde(default)]
    results: SparqlResults,
}

#[derive(Debug, Default, Deserialize)]
struct SparqlResults {
    #[serde(default)]
    bindings: Vec<HashMap<String, SparqlValue>>,
}

#[derive(Debug, Deserialize)]
struct SparqlValue {
    value: String,
}

// ----------------------------------------------------------------------------
// Parsing
// ----------------------------------------------------------------------------

fn join_titles(titles: &[CanonicalTitle]) -> String {
    titles
        .iter()
        .map(CanonicalTitle::as_str)
        .collect::<Vec<_>>()
        .join("|")
}

fn closure_query(root: &ClassId, limit: u32) -> String {
    format!(
        "SELECT DISTINCT ?class WHERE {{ ?class wdt:{SUBCLASS_OF}* wd:{root} . }} LIMIT {limit}"
    )
}

impl Entity {
    /// Item ids of a property's non-deprecated statements, in declared order.
    fn item_claims(&self, property: &str) -> ClassList {
        self.claims
            .get(property)
            .into_iter()
            .flatten()
            .filter(|claim| claim.rank.as_deref() != Some("deprecated"))
            .filter_map(|claim| claim.mainsnak.datavalue.as_ref())
            .filter_map(|value| value.value.get("id").and_then(|id| id.as_str()))
            .map(ClassId::from)
            .collect()
    }

    fn is_missing(&self) -> bool {
        self.missing.is_some()
    }
}

/// Follow normalization, then redirect, for every requested title.
fn parse_redirects(
    titles: &[CanonicalTitle],
    response: &QueryResponse,
) -> HashMap<CanonicalTitle, CanonicalTitle> {
    let normalized: HashMap<&str, &str> = response
        .query
        .normalized
        .iter()
        .map(|m| (m.from.as_str(), m.to.as_str()))
        .collect();
    let redirected: HashMap<&str, &str> = response
        .query
        .redirects
        .iter()
        .map(|m| (m.from.as_str(), m.to.as_str()))
        .collect();

    titles
        .iter()
        .filter_map(|title| {
            let step = normalized
                .get(title.as_str())
                .copied()
                .unwrap_or(title.as_str());
            let target = redirected.get(step).copied().unwrap_or(step);
            (target != title.as_str())
                .then(|| (title.clone(), CanonicalTitle::from_source(target)))
        })
        .collect()
}

fn parse_instance_classes(
    titles: &[CanonicalTitle],
    response: &EntitiesResponse,
    site: &str,
) -> HashMap<CanonicalTitle, ClassList> {
    let by_title: HashMap<&str, ClassList> = response
        .entities
        .values()
        .filter(|entity| !entity.is_missing())
        .filter_map(|entity| {
            let link = entity.sitelinks.get(site)?;
            Some((link.title.as_str(), entity.item_claims(INSTANCE_OF)))
        })
        .collect();

    titles
        .iter()
        .map(|title| {
            let classes = by_title.get(title.as_str()).cloned().unwrap_or_default();
            (title.clone(), classes)
        })
        .collect()
}

fn parse_parent_classes(
    classes: &[ClassId],
    response: &EntitiesResponse,
) -> HashMap<ClassId, Vec<ClassId>> {
    classes
        .iter()
        .map(|class| {
            let parents = response
                .entities
                .get(class.as_str())
                .or_else(|| {
                    // Merged items come back under their new id
                    response
                        .entities
                        .values()
                        .find(|e| e.id.as_deref() == Some(class.as_str()))
                })
                .filter(|entity| !entity.is_missing())
                .map(|entity| entity.item_claims(SUBCLASS_OF).iter().cloned().collect())
                .unwrap_or_default();
            (class.clone(), parents)
        })
        .collect()
}

fn parse_bindings(response: &SparqlResponse) -> Vec<ClassId> {
    response
        .results
        .bindings
        .iter()
        .filter_map(|binding| binding.get("class"))
        .filter_map(|value| ClassId::from_uri(&value.value))
        .collect()
}

fn parse_tags(
    titles: &[CanonicalTitle],
    response: &QueryResponse,
) -> HashMap<CanonicalTitle, TopicTags> {
    let redirects = parse_redirects(titles, response);
    let pages: HashMap<&str, &Page> = response
        .query
        .pages
        .iter()
        .map(|page| (page.title.as_str(), page))
        .collect();

    titles
        .iter()
        .filter_map(|title| {
            let resolved = redirects.get(title).unwrap_or(title);
            let page = pages.get(resolved.as_str())?;
            let tags = page
                .categories
                .iter()
                .map(|c| {
                    c.title
                        .strip_prefix("Category:")
                        .unwrap_or(&c.title)
                        .to_string()
                })
                .collect();
            let found = TopicTags {
                page: resolved.clone(),
                tags,
            };
            Some((title.clone(), found))
        })
        .collect()
}
