//! Sequential multi-file upload with an aggregate status line.
//!
//! Files in one submission go out one at a time; the next request starts only
//! after the previous one settled. Individual failures are counted, never
//! propagated.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::future::Future;

use crate::net::error::ApiError;

/// Singular/plural noun pair used in status text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadNoun {
    pub one: &'static str,
    pub many: &'static str,
}

pub const PHOTO_NOUN: UploadNoun = UploadNoun { one: "photo", many: "photos" };
pub const TRACK_NOUN: UploadNoun = UploadNoun { one: "track", many: "tracks" };

impl UploadNoun {
    fn count(self, n: usize) -> &'static str {
        if n == 1 { self.one } else { self.many }
    }
}

/// Success/failure counts for one submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadTally {
    pub success: usize,
    pub failed: usize,
}

impl UploadTally {
    pub fn total(self) -> usize {
        self.success + self.failed
    }

    /// Final status line for the submission.
    pub fn status_text(self, noun: UploadNoun) -> String {
        match (self.success, self.failed) {
            (0, 0) => "Nothing to upload".to_owned(),
            (n, 0) => format!("Uploaded {n} {} ✓", noun.count(n)),
            (0, _) => "All uploads failed".to_owned(),
            (ok, failed) => format!("Uploaded {ok}, failed {failed}"),
        }
    }
}

/// Status line shown while a submission is in flight.
pub fn uploading_text(total: usize, noun: UploadNoun) -> String {
    format!("Uploading {total} {}...", noun.count(total))
}

/// Run `upload` over `items` one at a time and count the outcomes.
pub async fn upload_sequential<I, F, Fut>(items: I, mut upload: F) -> UploadTally
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let mut tally = UploadTally::default();
    for item in items {
        match upload(item).await {
            Ok(()) => tally.success += 1,
            Err(e) => {
                leptos::logging::warn!("upload failed: {e}");
                tally.failed += 1;
            }
        }
    }
    tally
}
