//! Render targets on the host side.

use super::markup::Markup;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The three regions the pager replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    List,
    Pagination,
    Search,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::List, Region::Pagination, Region::Search];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::List => write!(f, "list"),
            Region::Pagination => write!(f, "pagination"),
            Region::Search => write!(f, "search"),
        }
    }
}

/// Host selectors for each region.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RegionSelectors {
    pub list: String,
    pub pagination: String,
    pub search: String,
}

impl Default for RegionSelectors {
    fn default() -> Self {
        Self {
            list: ".student-list".to_string(),
            pagination: ".pagination".to_string(),
            search: ".student-search".to_string(),
        }
    }
}

impl RegionSelectors {
    pub fn selector(&self, region: Region) -> &str {
        match region {
            Region::List => &self.list,
            Region::Pagination => &self.pagination,
            Region::Search => &self.search,
        }
    }
}

/// Where the pager puts its output.
pub trait Surface {
    /// Replace the whole content of `region`.
    fn replace_region(&mut self, region: Region, markup: &Markup);

    /// Show a message to the user (a "no results" alert, for example).
    fn notify(&mut self, message: &str);
}

/// Keeps the latest content of every region in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    selectors: RegionSelectors,
    regions: HashMap<Region, Markup>,
    notifications: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selectors(selectors: RegionSelectors) -> Self {
        Self {
            selectors,
            ..Self::default()
        }
    }

    pub fn region(&self, region: Region) -> Option<&Markup> {
        self.regions.get(&region)
    }

    pub fn html(&self, region: Region) -> &str {
        self.regions
            .get(&region)
            .map(|markup| markup.html.as_str())
            .unwrap_or("")
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Hand over pending notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }

    /// All rendered regions as one document, each preceded by its selector.
    pub fn to_document(&self) -> String {
        Region::ALL
            .iter()
            .filter_map(|region| {
                self.regions.get(region).map(|markup| {
                    format!(
                        "<!-- {} -->\n{}\n",
                        self.selectors.selector(*region),
                        markup.html
                    )
                })
            })
            .collect()
    }
}

impl Surface for MemorySurface {
    fn replace_region(&mut self, region: Region, markup: &Markup) {
        self.regions.insert(region, markup.clone());
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
