//
//  ibm-continuous-delivery
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cursor-Based Pagination
//!
//! This module provides the page iterator shared by every paginated list
//! operation of the Tekton Pipeline and Toolchain services. The two services
//! encode the continuation of a listing differently, and these types hide
//! that difference from the iterator.
//!
//! # Overview
//!
//! | Type | Role |
//! |------|------|
//! | [`ContinuationRef`] | Where the next page starts, in either service's encoding |
//! | [`Page`] | One decoded list response: items plus the normalized next cursor |
//! | [`ListParams`] | Caller parameters carrying the `start` cursor field |
//! | [`ListOperation`] | One network round trip returning a [`Page`] |
//! | [`Pager`] | The iterator: `has_next`, `get_next`, `get_all` |
//!
//! # Continuation Encodings
//!
//! **Tekton Pipeline** collections link to the next page with an href:
//! `{"next": {"href": "https://.../pipeline_runs?limit=10&start=ABC"}}`. The
//! cursor is the `start` query parameter of that URL.
//!
//! **Toolchain** collections expose the cursor directly:
//! `{"next": {"start": "XYZ", "href": "..."}}`.
//!
//! Each service adapter resolves its continuation into a [`Page`] once; the
//! [`Pager`] only ever sees an `Option<String>` cursor. An empty cursor counts
//! as no continuation.
//!
//! # Example
//!
//! ```rust,no_run
//! use ibm_continuous_delivery::api::toolchain::{CdToolchainV2, ListToolchainsParams};
//!
//! # async fn example(service: &CdToolchainV2) -> Result<(), ibm_continuous_delivery::api::ApiError> {
//! let params = ListToolchainsParams::new("resource-group-id").limit(50);
//! let mut pager = service.toolchains_pager(params)?;
//!
//! while pager.has_next() {
//!     for toolchain in pager.get_next().await? {
//!         println!("{}", toolchain.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - A pager owns its parameters; the caller's value is moved in at construction
//! - A failed `get_next` leaves the pager exactly as it was, so it can be retried
//! - `get_all` is all-or-nothing: any failure discards the pages collected so far

use async_trait::async_trait;
use url::Url;

use super::ApiError;

/// Name of the query parameter that carries the page cursor.
pub const CURSOR_FIELD: &str = "start";

/// Reference to the page that follows the current one.
///
/// # Variants
///
/// * `Url` - A fetchable URL whose `start` query parameter is the cursor
/// * `Direct` - The cursor value itself
///
/// # Example
///
/// ```rust
/// use ibm_continuous_delivery::api::common::ContinuationRef;
///
/// let by_url = ContinuationRef::Url("https://host/path?limit=5&start=ABC123".to_string());
/// assert_eq!(by_url.cursor().as_deref(), Some("ABC123"));
///
/// let direct = ContinuationRef::Direct("XYZ987".to_string());
/// assert_eq!(direct.cursor().as_deref(), Some("XYZ987"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContinuationRef {
    /// Cursor embedded in the query string of an href.
    Url(String),
    /// Cursor given as a plain value.
    Direct(String),
}

impl ContinuationRef {
    /// Resolves the cursor this reference points at.
    ///
    /// Returns `None` when a `Url` reference carries no `start` parameter,
    /// cannot be parsed, or the cursor is empty. The pager treats that as
    /// "no further pages".
    ///
    /// ```rust
    /// use ibm_continuous_delivery::api::common::ContinuationRef;
    ///
    /// assert_eq!(ContinuationRef::Url("/v2/runs?start=".to_string()).cursor(), None);
    /// assert_eq!(ContinuationRef::Direct(String::new()).cursor(), None);
    /// ```
    pub fn cursor(&self) -> Option<String> {
        match self {
            Self::Url(href) => cursor_from_href(href),
            Self::Direct(start) => Some(start.clone()),
        }
        .filter(|cursor| !cursor.is_empty())
    }
}

/// Extracts the `start` query parameter from an absolute or relative href.
///
/// Only an exact `start` key matches; `restart` or `start_at` are ignored.
///
/// # Example
///
/// ```rust
/// use ibm_continuous_delivery::api::common::cursor_from_href;
///
/// assert_eq!(cursor_from_href("/v2/runs?start=p2&limit=1").as_deref(), Some("p2"));
/// assert_eq!(cursor_from_href("https://host/v2/runs?restart=x"), None);
/// ```
pub fn cursor_from_href(href: &str) -> Option<String> {
    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse("http://localhost/").ok()?.join(href).ok()?
        }
        Err(_) => return None,
    };

    url.query_pairs()
        .find(|(key, _)| key == CURSOR_FIELD)
        .map(|(_, value)| value.into_owned())
}

/// One page of a listing.
///
/// # Type Parameters
///
/// - `T` - The type of items in the page
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in the order the service returned them.
    pub items: Vec<T>,

    /// Cursor of the next page; `None` on the last page.
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Creates a page, resolving `next` to its cursor.
    pub fn new(items: Vec<T>, next: Option<ContinuationRef>) -> Self {
        Self {
            items,
            next: next.as_ref().and_then(ContinuationRef::cursor),
        }
    }

    /// Creates a final page.
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// The cursor for the following page, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref()
    }
}

/// Parameters of a paginated list operation.
///
/// Implementors are plain values. Injecting a cursor builds a new value rather
/// than mutating the one the pager holds.
pub trait ListParams: Clone + Send + Sync {
    /// The cursor currently set on these parameters.
    fn start(&self) -> Option<&str>;

    /// A copy of these parameters with the cursor set to `start`.
    fn with_start(&self, start: &str) -> Self;
}

/// A single list round trip that a [`Pager`] can drive.
///
/// Implementations must be deterministic with respect to the cursor: the same
/// `start` and other parameters resume at the same logical position.
#[async_trait]
pub trait ListOperation: Send + Sync {
    /// Parameters accepted by the operation.
    type Params: ListParams;

    /// Items yielded by each page.
    type Item: Send;

    /// Fetches one page.
    async fn list_page(&self, params: &Self::Params) -> Result<Page<Self::Item>, ApiError>;
}

#[async_trait]
impl<Op: ListOperation + ?Sized> ListOperation for &Op {
    type Params = Op::Params;
    type Item = Op::Item;

    async fn list_page(&self, params: &Self::Params) -> Result<Page<Self::Item>, ApiError> {
        (**self).list_page(params).await
    }
}

/// Lifecycle of a [`Pager`].
///
/// ```text
/// Fresh --get_next--> HasMore | Exhausted
/// HasMore --get_next--> HasMore | Exhausted
/// Exhausted (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// No page fetched yet.
    Fresh,
    /// At least one page fetched and a cursor for the next one is held.
    HasMore,
    /// The last page has been observed.
    Exhausted,
}

/// Iterator over every page of a paginated listing.
///
/// # Type Parameters
///
/// - `Op` - The [`ListOperation`] performing each round trip
///
/// # Example
///
/// ```rust,no_run
/// use ibm_continuous_delivery::api::tekton::{CdTektonPipelineV2, ListTektonPipelineRunsParams};
///
/// # async fn example(service: &CdTektonPipelineV2) -> Result<(), ibm_continuous_delivery::api::ApiError> {
/// let params = ListTektonPipelineRunsParams::new("pipeline-id").status("failed");
/// let runs = service.tekton_pipeline_runs_pager(params)?.get_all().await?;
/// println!("{} failed runs", runs.len());
/// # Ok(())
/// # }
/// ```
pub struct Pager<Op: ListOperation> {
    operation: Op,
    params: Op::Params,
    next_cursor: Option<String>,
    state: PagerState,
}

impl<Op: ListOperation> std::fmt::Debug for Pager<Op> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("state", &self.state)
            .field("next_cursor", &self.next_cursor)
            .finish_non_exhaustive()
    }
}

impl<Op: ListOperation> Pager<Op> {
    /// Creates a pager over `operation` starting from the first page.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `params` already carries a
    /// `start` cursor. Resuming from a raw cursor is not supported; no request
    /// is made in that case.
    pub fn new(operation: Op, params: Op::Params) -> Result<Self, ApiError> {
        if params.start().is_some() {
            return Err(ApiError::InvalidArgument(format!(
                "the '{}' parameter must not be set when constructing a pager",
                CURSOR_FIELD
            )));
        }

        Ok(Self {
            operation,
            params,
            next_cursor: None,
            state: PagerState::Fresh,
        })
    }

    /// Returns `true` until a fetched page carried no continuation.
    ///
    /// Always `true` before the first [`get_next`](Self::get_next): there is
    /// at least one page to fetch, even if it turns out to be empty.
    pub fn has_next(&self) -> bool {
        self.state != PagerState::Exhausted
    }

    /// The current lifecycle state.
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// The cursor that the next [`get_next`](Self::get_next) will send.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    /// Fetches the next page and returns its items.
    ///
    /// # Errors
    ///
    /// - [`ApiError::IteratorExhausted`] if [`has_next`](Self::has_next) is `false`
    /// - Any error from the list operation, unchanged. The pager state is not
    ///   modified in that case and the call may be retried.
    pub async fn get_next(&mut self) -> Result<Vec<Op::Item>, ApiError> {
        if !self.has_next() {
            return Err(ApiError::IteratorExhausted);
        }

        let params = match &self.next_cursor {
            Some(cursor) => self.params.with_start(cursor),
            None => self.params.clone(),
        };

        let Page { items, next } = self.operation.list_page(&params).await?;

        match next {
            Some(cursor) => {
                tracing::trace!(cursor = %cursor, "pager advanced");
                self.next_cursor = Some(cursor);
                self.state = PagerState::HasMore;
            }
            None => {
                tracing::trace!("pager exhausted");
                self.next_cursor = None;
                self.state = PagerState::Exhausted;
            }
        }

        Ok(items)
    }

    /// Fetches every remaining page and concatenates the items in order.
    ///
    /// # Errors
    ///
    /// Fails the same way the first failing [`get_next`](Self::get_next)
    /// does; items gathered before the failure are discarded.
    pub async fn get_all(&mut self) -> Result<Vec<Op::Item>, ApiError> {
        let mut all = Vec::new();
        while self.has_next() {
            let items = self.get_next().await?;
            all.extend(items);
        }
        tracing::debug!(count = all.len(), "pager collected all items");
        Ok(all)
    }
}
