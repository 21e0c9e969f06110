//! Locale-aware string ordering used for every sorted output.
//!
//! Comparison uses the Unicode root collation (CLDR `und`) at tertiary
//! strength with punctuation non-ignorable:
//! 1) base characters, with whitespace and punctuation before digits and
//!    digits before letters (`ß` compares as `ss`, `æ` as `ae`);
//! 2) accents;
//! 3) case, lowercase before uppercase.
//!
//! A final code-point comparison keeps the order total, so equal keys only
//! happen for identical strings.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!(error = %err, "root collator unavailable; ordering by code point");
            None
        }
    }
}

fn compare_with(collator: Option<&Collator>, left: &str, right: &str) -> Ordering {
    collator
        .map_or(Ordering::Equal, |collator| collator.compare(left, right))
        .then_with(|| left.cmp(right))
}

/// Compare two strings with locale-aware ordering (`"a" < "B" < "b" < "c"`).
pub fn locale_cmp(left: &str, right: &str) -> Ordering {
    if left == right {
        return Ordering::Equal;
    }
    ROOT_COLLATOR.with(|collator| compare_with(collator.as_ref(), left, right))
}

/// Sort `items` in place by a string key using [`locale_cmp`].
///
/// The sort is stable.
pub fn sort_by_locale_key<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    ROOT_COLLATOR.with(|collator| {
        items.sort_by(|left, right| compare_with(collator.as_ref(), key(left), key(right)));
    });
}
