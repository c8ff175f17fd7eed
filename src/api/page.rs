//! List response decoding
//!
//! List endpoints answer in one of three shapes depending on the view and
//! whether pagination is enabled on the server:
//!
//! - a DRF page: `{"count", "next", "previous", "results"}`
//! - a bare JSON array
//! - the product envelope: `{"status", "data": {"products", "meta"}}`
//!
//! All three decode into [`Page`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// A complete list delivered in one response
    pub fn single(results: Vec<T>) -> Self {
        Self {
            count: results.len() as u64,
            next: None,
            previous: None,
            results,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Paginated {
        count: u64,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
    Enveloped {
        data: EnvelopeData<T>,
    },
    Bare(Vec<T>),
}

#[derive(Deserialize)]
struct EnvelopeData<T> {
    products: Vec<T>,
    #[serde(default)]
    meta: Option<EnvelopeMeta>,
}

#[derive(Deserialize)]
struct EnvelopeMeta {
    total: u64,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let page = match ListPayload::<T>::deserialize(deserializer)? {
            ListPayload::Paginated {
                count,
                next,
                previous,
                results,
            } => Page {
                count,
                next,
                previous,
                results,
            },
            ListPayload::Enveloped { data } => {
                let count = data
                    .meta
                    .map(|m| m.total)
                    .unwrap_or(data.products.len() as u64);
                Page {
                    count,
                    next: None,
                    previous: None,
                    results: data.products,
                }
            }
            ListPayload::Bare(results) => Page::single(results),
        };
        Ok(page)
    }
}

/// Detail payload that may be wrapped as `{"status", "data": {...}}`
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum MaybeEnveloped<T> {
    Enveloped { data: T },
    Plain(T),
}

impl<T> MaybeEnveloped<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            MaybeEnveloped::Enveloped { data } => data,
            MaybeEnveloped::Plain(value) => value,
        }
    }
}
