use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::list::{Debouncer, ListController};

/// Free-text search box bound to one filter key of a list.
pub struct SearchBox {
    debouncer: Debouncer<String>,
}

impl SearchBox {
    pub fn attach<T>(list: &ListController<T>, key: &'static str, delay: Duration) -> Self
    where
        T: DeserializeOwned + Send + 'static,
    {
        let list = list.clone();
        let debouncer = Debouncer::new(delay, move |term: String| {
            let list = list.clone();
            async move {
                list.set_filter(key, &term).await;
            }
        });
        Self { debouncer }
    }

    /// Records a keystroke; the list only reloads once typing pauses.
    pub fn input(&self, text: impl Into<String>) {
        self.debouncer.push(text.into());
    }
}
