use freedesktop_icons::lookup;
use gdk_pixbuf::Pixbuf;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;
use tactile::IconName;

static PATHS: OnceLock<RwLock<HashMap<String, Option<PathBuf>>>> = OnceLock::new();

/// Theme lookup is slow enough to matter at 60 fps paints, so resolved
/// paths (including misses) are cached for the process lifetime.
pub fn find_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    if icon_name.is_empty() {
        return None;
    }

    let cache = PATHS.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(cached) = cache.read().get(icon_name.as_str()) {
        return cached.clone();
    }

    let found = lookup(icon_name.as_str()).with_size(64).with_scale(1).find();
    cache
        .write()
        .insert(icon_name.to_string(), found.clone());
    found
}

pub fn load_pixbuf(icon_name: &IconName, size: i32) -> Option<Pixbuf> {
    let path = find_icon_path(icon_name)?;
    Pixbuf::from_file_at_scale(&path, size, size, true).ok()
}
