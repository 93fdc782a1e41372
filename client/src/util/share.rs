//! Sharing a booking confirmation link.
//!
//! Uses the platform share sheet when the browser exposes `navigator.share`
//! and otherwise copies the link to the clipboard. Requires a browser
//! environment; SSR paths return an error.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use marketplace::host::Booking;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;
#[cfg(feature = "hydrate")]
use wasm_bindgen_futures::JsFuture;

/// How a share request was fulfilled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

impl ShareOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Shared => "Shared!",
            Self::Copied => "Link copied to clipboard",
        }
    }
}

/// Absolute confirmation link for a booking.
pub fn confirmation_url(origin: &str, booking: &Booking) -> String {
    format!("{}{}", origin.trim_end_matches('/'), booking.confirmation_path())
}

/// Share-sheet title for a booking.
pub fn share_title(booking: &Booking) -> String {
    if booking.listing_title.is_empty() {
        "My StayFinder booking".to_owned()
    } else {
        format!("My stay at {}", booking.listing_title)
    }
}

/// Share-sheet body for a booking.
pub fn share_text(booking: &Booking) -> String {
    let mut text = format!("{} to {}", booking.check_in, booking.check_out);
    if let Some(code) = booking.confirmation_code.as_deref() {
        text.push_str(&format!(" (confirmation {code})"));
    }
    text
}

/// Origin of the current page, e.g. `https://stayfinder.example`.
pub fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Share `url` via the platform share sheet, falling back to the clipboard.
///
/// # Errors
///
/// Returns an error string if neither sharing nor copying succeeds.
pub async fn share_link(title: &str, text: &str, url: &str) -> Result<ShareOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_owned())?;
        let navigator = window.navigator();

        let can_share = js_sys::Reflect::has(&navigator, &JsValue::from_str("share")).unwrap_or(false);
        if can_share {
            let data = web_sys::ShareData::new();
            data.set_title(title);
            data.set_text(text);
            data.set_url(url);
            match JsFuture::from(navigator.share_with_data(&data)).await {
                Ok(_) => return Ok(ShareOutcome::Shared),
                Err(e) => leptos::logging::warn!("share sheet failed, copying link instead: {e:?}"),
            }
        }

        JsFuture::from(navigator.clipboard().write_text(url))
            .await
            .map_err(|e| format!("clipboard write failed: {e:?}"))?;
        Ok(ShareOutcome::Copied)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, text, url);
        Err("not available on server".to_owned())
    }
}
