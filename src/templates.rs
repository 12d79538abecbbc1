//! Server-rendered page fragments. Plain string templates; anything
//! caller-supplied is attribute-escaped before it lands in markup.

use html_escape::encode_double_quoted_attribute;

/// Fixed base class of the logo container.
pub const LOGO_BASE_CLASS: &str = "logo-container";
/// Fixed logo asset path, served from the `/assets` mount.
pub const LOGO_SRC: &str = "/assets/logo.svg";
pub const LOGO_ALT: &str = "TipsyMeter Logo";
const LOGO_SIZE_CLASSES: &str = "h-16 md:h-20";

/// Render the logo element: a container div carrying the fixed base class
/// plus any caller-supplied classes, wrapping one image with constant source,
/// alt text and size classes. Pass an empty string for no extra classes.
pub fn logo(extra_classes: &str) -> String {
    let class = if extra_classes.is_empty() {
        LOGO_BASE_CLASS.to_string()
    } else {
        format!(
            "{} {}",
            LOGO_BASE_CLASS,
            encode_double_quoted_attribute(extra_classes)
        )
    };

    format!(
        r#"<div class="{class}"><img src="{LOGO_SRC}" alt="{LOGO_ALT}" class="{LOGO_SIZE_CLASSES}" /></div>"#
    )
}

pub fn render_index() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>TipsyMeter</title>
</head>
<body>
    <main class="container mx-auto px-4 py-8">
        {logo}
        <h1 class="text-2xl font-bold mt-4">TipsyMeter</h1>
        <p class="text-gray-600 mt-2">
            Log your drinks, keep an eye on your tipsy level, and remember to
            drink water.
        </p>
        <p class="text-gray-400 mt-4 text-sm">API lives under <code>/api</code>.</p>
    </main>
</body>
</html>"#,
        logo = logo("mb-4")
    )
}
