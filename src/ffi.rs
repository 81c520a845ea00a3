//! FFI layer - C-compatible interface for dynamic hosts
//!
//! Design principles:
//! - One zero-argument export per built-in theme, with stable symbol names
//! - Parameterized exports wrap the same core for hosts that can pass arguments
//! - No panics across the boundary; failures become status codes
//!
//! All exports share one process-wide `StyleContext`. The lock keeps the
//! table memory-safe, but hosts should still make style calls from the thread
//! that renders, so a frame never observes a half-switched style.

use crate::style::DefaultProperty;
use crate::{FontRef, StyleConfig, StyleContext, StyleError, StyleSheet, ThemeId};
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Call succeeded
pub const STATUS_OK: c_int = 0;
/// Null pointer, bad index or malformed argument
pub const STATUS_INVALID_ARGUMENT: c_int = -1;
/// Theme exists but was compiled out
pub const STATUS_THEME_UNAVAILABLE: c_int = -2;
/// Style file or text could not be read or parsed
pub const STATUS_LOAD_FAILED: c_int = -3;

lazy_static::lazy_static! {
    static ref STYLE_CONTEXT: Mutex<StyleContext> = Mutex::new(StyleContext::default());
}

fn context() -> MutexGuard<'static, StyleContext> {
    // A panic while holding the lock cannot leave the table half-written
    // (every write path validates first), so the poisoned value is still usable.
    STYLE_CONTEXT.lock().unwrap_or_else(PoisonError::into_inner)
}

fn status_of(call: &str, result: Result<(), StyleError>) -> c_int {
    match result {
        Ok(()) => STATUS_OK,
        Err(err) => {
            log::warn!("{} failed: {}", call, err);
            match err {
                StyleError::ThemeUnavailable(_) => STATUS_THEME_UNAVAILABLE,
                StyleError::Parse { .. } | StyleError::Toml(_) | StyleError::Io(_) => {
                    STATUS_LOAD_FAILED
                }
                _ => STATUS_INVALID_ARGUMENT,
            }
        }
    }
}

unsafe fn str_arg<'a>(call: &str, ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        log::warn!("{}: null string argument", call);
        return None;
    }
    match CStr::from_ptr(ptr).to_str() {
        Ok(s) => Some(s),
        Err(_) => {
            log::warn!("{}: argument is not valid UTF-8", call);
            None
        }
    }
}

fn load_builtin(id: ThemeId) {
    if let Err(err) = context().load_theme(id) {
        log::warn!("loading style '{}' failed: {}", id, err);
    }
}

macro_rules! theme_exports {
    ($($feature:tt => $symbol:ident => $id:ident),* $(,)?) => {
        $(
            #[doc = concat!("Load the built-in ", stringify!($id), " style over the global style table")]
            #[cfg(feature = $feature)]
            #[no_mangle]
            pub extern "C" fn $symbol() {
                load_builtin(ThemeId::$id);
            }
        )*
    };
}

theme_exports! {
    "theme-amber" => DynGuiLoadStyleAmber => Amber,
    "theme-genesis" => DynGuiLoadStyleGenesis => Genesis,
    "theme-jungle" => DynGuiLoadStyleJungle => Jungle,
    "theme-cyber" => DynGuiLoadStyleCyber => Cyber,
    "theme-lavanda" => DynGuiLoadStyleLavanda => Lavanda,
    "theme-cherry" => DynGuiLoadStyleCherry => Cherry,
    "theme-enefete" => DynGuiLoadStyleEnefete => Enefete,
    "theme-rltech" => DynGuiLoadStyleRLTech => RLTech,
    "theme-sunny" => DynGuiLoadStyleSunny => Sunny,
    "theme-terminal" => DynGuiLoadStyleTerminal => Terminal,
    "theme-bluish" => DynGuiLoadStyleBluish => Bluish,
    "theme-dark" => DynGuiLoadStyleDark => Dark,
    "theme-candy" => DynGuiLoadStyleCandy => Candy,
    "theme-ashes" => DynGuiLoadStyleAshes => Ashes,
}

/// Reset the global context from a JSON config
///
/// # Safety
/// - config_json must be null or a valid null-terminated UTF-8 string
#[no_mangle]
pub unsafe extern "C" fn gui_style_init(config_json: *const c_char) -> c_int {
    let config = if config_json.is_null() {
        StyleConfig::default()
    } else {
        let Some(json) = str_arg("gui_style_init", config_json) else {
            return STATUS_INVALID_ARGUMENT;
        };
        match StyleConfig::from_json(json) {
            Ok(config) => config,
            Err(err) => return status_of("gui_style_init", Err(err)),
        }
    };

    match StyleContext::new(config) {
        Ok(new_context) => {
            *context() = new_context;
            STATUS_OK
        }
        Err(err) => status_of("gui_style_init", Err(err)),
    }
}

/// Load a style by selector index: 0 is the default style, 1..=14 the themes
#[no_mangle]
pub extern "C" fn gui_style_load(index: c_int) -> c_int {
    if index == 0 {
        context().load_default();
        return STATUS_OK;
    }
    match u32::try_from(index).ok().and_then(ThemeId::from_index) {
        Some(id) => status_of("gui_style_load", context().load_theme(id)),
        None => {
            log::warn!("gui_style_load: no style at index {}", index);
            STATUS_INVALID_ARGUMENT
        }
    }
}

/// Load the library default style
#[no_mangle]
pub extern "C" fn gui_style_load_default() {
    context().load_default();
}

/// Get one style property (0 when out of range)
#[no_mangle]
pub extern "C" fn gui_style_get(control: c_int, property: c_int) -> c_int {
    let (Ok(control), Ok(property)) = (u32::try_from(control), u32::try_from(property)) else {
        return 0;
    };
    match context().table().get(control, property) {
        Ok(value) => value as c_int,
        Err(err) => {
            log::warn!("gui_style_get failed: {}", err);
            0
        }
    }
}

/// Set one style property; DEFAULT base properties propagate to every control
#[no_mangle]
pub extern "C" fn gui_style_set(control: c_int, property: c_int, value: c_int) -> c_int {
    let (Ok(control), Ok(property)) = (u32::try_from(control), u32::try_from(property)) else {
        return STATUS_INVALID_ARGUMENT;
    };
    status_of(
        "gui_style_set",
        context().table_mut().set(control, property, value as u32),
    )
}

/// Load a `.rgs` or `.toml` style file over the current style
///
/// # Safety
/// - path must be a valid null-terminated UTF-8 string
#[no_mangle]
pub unsafe extern "C" fn gui_style_load_file(path: *const c_char) -> c_int {
    let Some(path) = str_arg("gui_style_load_file", path) else {
        return STATUS_INVALID_ARGUMENT;
    };
    // Parse outside the lock; file I/O should not block readers.
    let sheet = match StyleSheet::load_file(path) {
        Ok(sheet) => sheet,
        Err(err) => return status_of("gui_style_load_file", Err(err)),
    };
    status_of("gui_style_load_file", context().apply_sheet(&sheet))
}

/// Apply `.rgs` text over the current style
///
/// # Safety
/// - text must be a valid null-terminated UTF-8 string
#[no_mangle]
pub unsafe extern "C" fn gui_style_load_rgs(text: *const c_char) -> c_int {
    let Some(text) = str_arg("gui_style_load_rgs", text) else {
        return STATUS_INVALID_ARGUMENT;
    };
    let sheet = match StyleSheet::from_rgs(text) {
        Ok(sheet) => sheet,
        Err(err) => return status_of("gui_style_load_rgs", Err(err)),
    };
    status_of("gui_style_load_rgs", context().apply_sheet(&sheet))
}

/// Export the current style as `.rgs` text
/// Returns a string the caller must free with gui_style_free_string
#[no_mangle]
pub extern "C" fn gui_style_export_rgs() -> *mut c_char {
    let text = context().export_rgs();
    match CString::new(text) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a string returned by gui_style_export_rgs or gui_style_font_name
///
/// # Safety
/// - ptr must be a string returned by this library
/// - ptr must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gui_style_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Copy the property words (row-major, 24 per control) into `out`
///
/// Copies at most `len` words and returns the total word count, so a call
/// with a null `out` sizes the buffer.
///
/// # Safety
/// - out must be null or point to at least `len` writable u32 values
#[no_mangle]
pub unsafe extern "C" fn gui_style_copy_table(out: *mut u32, len: usize) -> usize {
    let context = context();
    let words = context.table().as_words();
    if !out.is_null() {
        let n = len.min(words.len());
        std::slice::from_raw_parts_mut(out, n).copy_from_slice(&words[..n]);
    }
    words.len()
}

/// Base size of the active style font
#[no_mangle]
pub extern "C" fn gui_style_font_size() -> c_int {
    context().table().font().base_size as c_int
}

/// Name of the active style font
/// Returns a string the caller must free with gui_style_free_string
#[no_mangle]
pub extern "C" fn gui_style_font_name() -> *mut c_char {
    let name = context().table().font().name.clone();
    match CString::new(name) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Replace the active style font; DEFAULT text size follows the base size
///
/// # Safety
/// - name must be a valid null-terminated UTF-8 string
#[no_mangle]
pub unsafe extern "C" fn gui_style_set_font(name: *const c_char, base_size: c_int) -> c_int {
    let Some(name) = str_arg("gui_style_set_font", name) else {
        return STATUS_INVALID_ARGUMENT;
    };
    let base_size = match u32::try_from(base_size) {
        Ok(size) if size > 0 => size,
        _ => {
            log::warn!("gui_style_set_font: invalid base size {}", base_size);
            return STATUS_INVALID_ARGUMENT;
        }
    };
    let mut context = context();
    let table = context.table_mut();
    table.set_font(FontRef::new(name, base_size));
    status_of(
        "gui_style_set_font",
        table.set(0, DefaultProperty::TextSize as u32, base_size),
    )
}

/// Number of theme selector slots (excluding the default style at index 0)
#[no_mangle]
pub extern "C" fn gui_style_theme_count() -> c_int {
    ThemeId::ALL.len() as c_int
}

/// Name of the theme at a selector index, or NULL
/// Returns a static string (do NOT free)
#[no_mangle]
pub extern "C" fn gui_style_theme_name(index: c_int) -> *const c_char {
    match u32::try_from(index).ok().and_then(ThemeId::from_index) {
        Some(id) => id.name_with_nul().as_ptr() as *const c_char,
        None => ptr::null(),
    }
}

/// Whether the theme at a selector index was compiled in (1) or not (0)
#[no_mangle]
pub extern "C" fn gui_style_theme_available(index: c_int) -> c_int {
    let available = u32::try_from(index)
        .ok()
        .and_then(ThemeId::from_index)
        .and_then(crate::theme::lookup)
        .is_some();
    available as c_int
}

/// Get version string (for debugging)
/// Returns a static string (do NOT free)
#[no_mangle]
pub extern "C" fn gui_style_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleTable, MAX_CONTROLS, MAX_PROPS};

    // Exports share one global context; tests that touch it run one at a time.
    static GLOBAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot() -> StyleTable {
        context().table().clone()
    }

    #[test]
    fn test_theme_names_match_registry() {
        for id in ThemeId::ALL {
            let c_name = unsafe { CStr::from_ptr(gui_style_theme_name(id.index() as c_int)) };
            assert_eq!(c_name.to_str().unwrap(), id.name());
        }
        assert!(gui_style_theme_name(0).is_null());
        assert!(gui_style_theme_name(15).is_null());
        assert!(gui_style_theme_name(-3).is_null());
        assert_eq!(gui_style_theme_count(), 14);
    }

    #[cfg(feature = "all-themes")]
    #[test]
    fn test_zero_argument_exports() {
        let _guard = serial();
        let exports: [(extern "C" fn(), ThemeId); 14] = [
            (DynGuiLoadStyleAmber, ThemeId::Amber),
            (DynGuiLoadStyleGenesis, ThemeId::Genesis),
            (DynGuiLoadStyleJungle, ThemeId::Jungle),
            (DynGuiLoadStyleCyber, ThemeId::Cyber),
            (DynGuiLoadStyleLavanda, ThemeId::Lavanda),
            (DynGuiLoadStyleCherry, ThemeId::Cherry),
            (DynGuiLoadStyleEnefete, ThemeId::Enefete),
            (DynGuiLoadStyleRLTech, ThemeId::RLTech),
            (DynGuiLoadStyleSunny, ThemeId::Sunny),
            (DynGuiLoadStyleTerminal, ThemeId::Terminal),
            (DynGuiLoadStyleBluish, ThemeId::Bluish),
            (DynGuiLoadStyleDark, ThemeId::Dark),
            (DynGuiLoadStyleCandy, ThemeId::Candy),
            (DynGuiLoadStyleAshes, ThemeId::Ashes),
        ];
        for (export, id) in exports {
            export();
            assert_eq!(Some(snapshot()), crate::theme::canonical(id), "{id}");
            assert_eq!(gui_style_theme_available(id.index() as c_int), 1);
        }
    }

    #[cfg(feature = "all-themes")]
    #[test]
    fn test_dark_then_candy_through_exports() {
        let _guard = serial();
        DynGuiLoadStyleDark();
        let dark_background = gui_style_get(0, 19);
        DynGuiLoadStyleCandy();
        let candy_background = gui_style_get(0, 19);
        assert_eq!(candy_background as u32, 0xfff5e1ff);
        assert_ne!(candy_background, dark_background);
        assert_eq!(gui_style_font_size(), 15);
    }

    #[cfg(feature = "all-themes")]
    #[test]
    fn test_amber_twice_is_identical() {
        let _guard = serial();
        DynGuiLoadStyleAmber();
        let first = snapshot();
        DynGuiLoadStyleAmber();
        assert_eq!(snapshot(), first);
    }

    #[test]
    fn test_load_by_index() {
        let _guard = serial();
        assert_eq!(gui_style_load(0), STATUS_OK);
        assert_eq!(snapshot(), StyleTable::new());
        assert_eq!(gui_style_load(15), STATUS_INVALID_ARGUMENT);
        assert_eq!(gui_style_load(-1), STATUS_INVALID_ARGUMENT);

        #[cfg(feature = "theme-dark")]
        {
            assert_eq!(gui_style_load(3), STATUS_OK);
            assert_eq!(snapshot().background_color(), crate::Color::from_hex(0x3c3c3cff));
            gui_style_load_default();
            assert_eq!(snapshot(), StyleTable::new());
        }
    }

    #[test]
    fn test_get_and_set() {
        let _guard = serial();
        gui_style_load_default();
        assert_eq!(gui_style_set(0, 2, 0x112233ffu32 as c_int), STATUS_OK);
        assert_eq!(gui_style_get(7, 2) as u32, 0x112233ff);
        assert_eq!(gui_style_set(16, 0, 1), STATUS_INVALID_ARGUMENT);
        assert_eq!(gui_style_set(0, -1, 1), STATUS_INVALID_ARGUMENT);
        assert_eq!(gui_style_get(0, 24), 0);
        gui_style_load_default();
    }

    #[test]
    fn test_init_config() {
        let _guard = serial();
        let bad = CString::new("{\"initial_theme\": 7}").unwrap();
        assert_eq!(unsafe { gui_style_init(bad.as_ptr()) }, STATUS_INVALID_ARGUMENT);
        assert_eq!(unsafe { gui_style_init(ptr::null()) }, STATUS_OK);
        assert_eq!(snapshot(), StyleTable::new());

        #[cfg(feature = "theme-cyber")]
        {
            let json = CString::new("{\"initial_theme\": \"cyber\"}").unwrap();
            assert_eq!(unsafe { gui_style_init(json.as_ptr()) }, STATUS_OK);
            assert_eq!(Some(snapshot()), crate::theme::canonical(ThemeId::Cyber));
            assert_eq!(unsafe { gui_style_init(ptr::null()) }, STATUS_OK);
        }
    }

    #[test]
    fn test_rgs_text_and_export() {
        let _guard = serial();
        gui_style_load_default();

        let text = CString::new("p 00 19 0x202020ff\np 02 12 5\n").unwrap();
        assert_eq!(unsafe { gui_style_load_rgs(text.as_ptr()) }, STATUS_OK);
        assert_eq!(gui_style_get(0, 19) as u32, 0x202020ff);
        assert_eq!(gui_style_get(2, 12), 5);

        let before = snapshot();
        let bad = CString::new("p 00 19 0x202020ff\nz").unwrap();
        assert_eq!(unsafe { gui_style_load_rgs(bad.as_ptr()) }, STATUS_LOAD_FAILED);
        assert_eq!(snapshot(), before);
        assert_eq!(unsafe { gui_style_load_rgs(ptr::null()) }, STATUS_INVALID_ARGUMENT);

        let exported = gui_style_export_rgs();
        assert!(!exported.is_null());
        let exported_text = unsafe { CStr::from_ptr(exported) }.to_str().unwrap().to_string();
        unsafe { gui_style_free_string(exported) };
        assert!(exported_text.contains("p 00 19 0x202020ff"));

        gui_style_load_default();
    }

    #[test]
    fn test_load_missing_file() {
        let _guard = serial();
        let path = CString::new("/nonexistent/style.rgs").unwrap();
        assert_eq!(unsafe { gui_style_load_file(path.as_ptr()) }, STATUS_LOAD_FAILED);
    }

    #[test]
    fn test_copy_table() {
        let _guard = serial();
        gui_style_load_default();
        let total = unsafe { gui_style_copy_table(ptr::null_mut(), 0) };
        assert_eq!(total, MAX_CONTROLS * MAX_PROPS);

        let mut words = vec![0u32; total];
        let copied = unsafe { gui_style_copy_table(words.as_mut_ptr(), words.len()) };
        assert_eq!(copied, total);
        assert_eq!(words[19], 0xf5f5f5ff);

        let mut short = [0u32; 4];
        unsafe { gui_style_copy_table(short.as_mut_ptr(), short.len()) };
        assert_eq!(short[0], 0x838383ff);
    }

    #[test]
    fn test_font_name_and_size() {
        let _guard = serial();
        gui_style_load_default();

        let name = CString::new("Pixel  Intv").unwrap();
        assert_eq!(unsafe { gui_style_set_font(name.as_ptr(), 12) }, STATUS_OK);
        assert_eq!(gui_style_font_size(), 12);
        assert_eq!(gui_style_get(0, 16), 12);

        let current = gui_style_font_name();
        assert!(!current.is_null());
        assert_eq!(unsafe { CStr::from_ptr(current) }.to_str().unwrap(), "Pixel  Intv");
        unsafe { gui_style_free_string(current) };

        assert_eq!(unsafe { gui_style_set_font(name.as_ptr(), 0) }, STATUS_INVALID_ARGUMENT);
        assert_eq!(unsafe { gui_style_set_font(ptr::null(), 12) }, STATUS_INVALID_ARGUMENT);
        assert_eq!(gui_style_font_size(), 12);

        gui_style_load_default();
        assert_eq!(snapshot(), StyleTable::new());
    }

    #[cfg(not(feature = "theme-amber"))]
    #[test]
    fn test_compiled_out_theme_status() {
        let _guard = serial();
        gui_style_load_default();
        let amber = ThemeId::Amber.index() as c_int;

        assert_eq!(gui_style_theme_available(amber), 0);
        assert_eq!(gui_style_load(amber), STATUS_THEME_UNAVAILABLE);
        assert_eq!(snapshot(), StyleTable::new());

        let json = CString::new("{\"initial_theme\": \"amber\"}").unwrap();
        assert_eq!(unsafe { gui_style_init(json.as_ptr()) }, STATUS_THEME_UNAVAILABLE);
        assert_eq!(snapshot(), StyleTable::new());

        let name = unsafe { CStr::from_ptr(gui_style_theme_name(amber)) };
        assert_eq!(name.to_str().unwrap(), "amber");
    }

    #[test]
    fn test_version_string() {
        let version = unsafe { CStr::from_ptr(gui_style_version()) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }
}
