//! Outbound contact and share deep links.
//!
//! Pure string templating over an entry id plus the canonical listing URL,
//! handed to the system browser fire-and-forget. No responses are handled.

/// WhatsApp number of the farm, international format without '+'
const SELLER_WHATSAPP: &str = "919167880272";

/// Phone number for the "Call Now" action
const SELLER_PHONE: &str = "+919167880272";

/// Public site the listings are shared from
const SITE_URL: &str = "https://ablivestocks.com";

/// Canonical public URL of one listing
pub fn listing_url(id: &str) -> String {
    format!("{SITE_URL}/goat/{id}")
}

/// WhatsApp deep link to the seller, prefilled with an inquiry for `id`
pub fn contact_whatsapp_url(id: &str) -> String {
    let message = format!("Hi! I'm interested in Goat ID: {id}");
    format!(
        "https://wa.me/{SELLER_WHATSAPP}?text={}",
        urlencoding::encode(&message)
    )
}

/// `tel:` link for the call action
pub fn call_url() -> String {
    format!("tel:{SELLER_PHONE}")
}

/// Share blurb for one listing
pub fn share_text(id: &str) -> String {
    format!("Check out this goat from A.B Livestocks - ID: {id}")
}

/// Share a listing through WhatsApp (text and link in the message body)
pub fn share_whatsapp_url(id: &str) -> String {
    let message = format!("{}\n{}", share_text(id), listing_url(id));
    format!("https://wa.me/?text={}", urlencoding::encode(&message))
}

/// Share a listing on Twitter
pub fn share_twitter_url(id: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        urlencoding::encode(&share_text(id)),
        urlencoding::encode(&listing_url(id))
    )
}

/// Share a listing on Facebook
pub fn share_facebook_url(id: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}",
        urlencoding::encode(&listing_url(id))
    )
}

/// Hand a link to the system browser. Fire-and-forget: a failure is logged
/// and otherwise ignored, matching the original's external navigation.
pub fn open_external(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        eprintln!("⚠️  Could not open {url}: {e}");
    }
}
