//! View layer
//!
//! - `gallery.rs` - scrollable fixed-column grid of the store
//! - `item.rs` - one grid cell (thumbnail + remove control)
//! - `overlay.rs` - full-screen detail view of the selection
//!
//! Views are pure projections of the state; every interaction comes back
//! to `GalleryApp::update` as a `Message`.

pub mod gallery;
pub mod item;
pub mod overlay;

use iced::widget::image::Handle;

/// Resolve a record uri to something the image widget can load.
/// Plain paths and `file://` uris are both accepted.
pub fn image_handle(uri: &str) -> Handle {
    Handle::from_path(local_path(uri))
}

fn local_path(uri: &str) -> &str {
    uri.strip_prefix("file://").unwrap_or(uri)
}
