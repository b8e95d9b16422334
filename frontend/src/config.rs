//! Application configuration.
//!
//! Centralized constants for the Cakes & Tales frontend. They are baked in
//! at build time; the site has no runtime configuration.

/// Form-handling endpoint receiving enquiries.
///
/// Third-party service; accepts a JSON POST and answers 2xx on success.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mkownwpe";

/// Bakery name, used in the header, page title and footer.
pub const SITE_NAME: &str = "Cakes & Tales";

/// Page meta description.
pub const SITE_DESCRIPTION: &str =
    "Handcrafted plum cakes and cupcakes, baked fresh. Book your celebration cake online.";

/// Phone number shown next to the enquiry form.
pub const CONTACT_PHONE: &str = "8951227039";

/// Give up on the form endpoint after this many milliseconds.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Maximum toasts visible at once; newer ones push older ones out.
pub const TOAST_LIMIT: usize = 1;

/// Element id of the enquiry section, target of "Order Now".
pub const CONTACT_SECTION_ID: &str = "contact";
