use crate::html;
use crate::normalize::normalize;
use crate::tokenizer;
use anyhow::Result;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::io::{Read, Write};

pub type DocId = u32;

/// Default weight multiplier for words appearing in an HTML title.
pub const DEFAULT_TITLE_WEIGHT: u32 = 10;

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    #[serde(rename = "u")]
    pub url: String,
    #[serde(rename = "t")]
    pub title: String,
}

/// One term occurrence record: the document and the accumulated weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc: DocId,
    pub weight: u32,
}

impl Serialize for Posting {
    // Weight-1 postings dominate the artifact, so they serialize as the
    // bare document id; anything heavier becomes a [doc, weight] pair.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.weight == 1 {
            serializer.serialize_u32(self.doc)
        } else {
            (self.doc, self.weight).serialize(serializer)
        }
    }
}

/// Write-once inverted index: a document table plus term -> postings map.
/// All mutation goes through `add_text`/`add_html`; serialization of the
/// same call sequence is byte-identical (documents keep insertion order,
/// terms sort by key).
#[derive(Debug, Serialize)]
pub struct Index {
    docs: Vec<Document>,
    words: BTreeMap<String, Vec<Posting>>,
    /// Weight multiplier applied to HTML title words.
    #[serde(skip)]
    pub html_title_weight: u32,
    /// When set, URL components are indexed too, this budget decaying
    /// across them.
    #[serde(skip)]
    pub url_weight: Option<u32>,
}

impl Index {
    pub fn new() -> Self {
        Index {
            docs: Vec::new(),
            words: BTreeMap::new(),
            html_title_weight: DEFAULT_TITLE_WEIGHT,
            url_weight: None,
        }
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn words(&self) -> &BTreeMap<String, Vec<Posting>> {
        &self.words
    }

    /// Append a document, returning its stable 0-based id.
    pub fn new_document(&mut self, url: &str, title: &str) -> DocId {
        self.docs.push(Document {
            url: url.to_string(),
            title: title.to_string(),
        });
        (self.docs.len() - 1) as DocId
    }

    fn add_word(&mut self, word: String, doc: DocId, weight: u32) {
        self.words.entry(word).or_default().push(Posting { doc, weight });
    }

    /// Tokenize and normalize `text`, accumulate `weight` per occurrence of
    /// each surviving term, then append one posting per term for `doc`.
    /// A term repeated within one call merges additively before insertion;
    /// separate calls append separate postings.
    pub fn add_weighted_text(&mut self, doc: DocId, text: &str, weight: u32) {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokenizer::words(text) {
            if let Some(term) = normalize(token) {
                *counts.entry(term).or_insert(0) += weight;
            }
        }
        for (term, count) in counts {
            self.add_word(term, doc, count);
        }
    }

    /// Index a plain-text document at weight 1. Only read failures
    /// propagate; bytes are decoded lossily.
    pub fn add_text<R: Read>(&mut self, url: &str, title: &str, reader: R) -> Result<DocId> {
        let text = read_lossy(reader)?;
        let doc = self.new_document(url, title);
        self.add_weighted_text(doc, &text, 1);
        tracing::debug!(doc, url, "indexed text document");
        Ok(doc)
    }

    /// Index an HTML document: the extracted title at `html_title_weight`,
    /// URL components (when enabled) at a decaying weight, body content at 1.
    pub fn add_html<R: Read>(&mut self, url: &str, reader: R) -> Result<DocId> {
        let raw = read_lossy(reader)?;
        let page = html::extract(&raw);
        let doc = self.new_document(url, &page.title);
        self.add_weighted_text(doc, &page.title, self.html_title_weight);
        if let Some(budget) = self.url_weight {
            self.add_url_components(doc, url, budget);
        }
        self.add_weighted_text(doc, &page.content, 1);
        tracing::debug!(doc, url, title = %page.title, "indexed html document");
        Ok(doc)
    }

    // Earlier URL components name broader site sections, so the budget
    // halves with each step away from the first one, clamped at 1.
    fn add_url_components(&mut self, doc: DocId, url: &str, budget: u32) {
        let mut rest = url;
        for scheme in ["http://", "https://"] {
            if let Some(s) = rest.strip_prefix(scheme) {
                rest = s;
                break;
            }
        }
        rest = rest.strip_prefix("www.").unwrap_or(rest);
        for (i, component) in rest.split('/').filter(|c| !c.is_empty()).enumerate() {
            let weight = budget.checked_shr(i as u32).unwrap_or(0).max(1);
            self.add_weighted_text(doc, component, weight);
        }
    }

    /// Write the index as `{"docs": [...], "words": {...}}` followed by a
    /// newline.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

fn read_lossy<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn posting_encoding_is_compact() {
        let light = serde_json::to_value(Posting { doc: 3, weight: 1 }).unwrap();
        assert_eq!(light, json!(3));
        let heavy = serde_json::to_value(Posting { doc: 3, weight: 7 }).unwrap();
        assert_eq!(heavy, json!([3, 7]));
    }

    #[test]
    fn document_ids_follow_insertion_order() {
        let mut index = Index::new();
        assert_eq!(index.new_document("/a", "A"), 0);
        assert_eq!(index.new_document("/b", "B"), 1);
        assert_eq!(index.docs()[1].url, "/b");
    }

    #[test]
    fn url_components_decay_geometrically() {
        let mut index = Index::new();
        let doc = index.new_document("ignored", "");
        index.add_url_components(doc, "https://www.example.com/guides/zebra/quartz", 10);
        let weight_of = |term: &str| index.words()[term][0].weight;
        // host at the full budget, then 5, 2, 1
        assert_eq!(weight_of("zebra"), 2);
        assert_eq!(weight_of("quartz"), 1);
        assert_eq!(weight_of("guid"), 5);
    }
}
