use dioxus::prelude::*;

// Resolves the path an img tag should carry: absolute URLs pass through
// untouched, anything else is rooted under / for the static file server.
pub fn resolve_image_path(name: &str, ext: &str, folder: &str, src: Option<&str>) -> String {
    if let Some(src) = src {
        if is_absolute_url(src) {
            return src.to_owned();
        }
        return format!("/{}", src.trim_start_matches('/'));
    }

    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        format!("/{name}.{ext}")
    } else {
        format!("/{folder}/{name}.{ext}")
    }
}

fn is_absolute_url(src: &str) -> bool {
    let lowered = src.to_ascii_lowercase();

    lowered.starts_with("http:")
        || lowered.starts_with("https:")
        || lowered.starts_with("data:")
        || src.starts_with("//")
}

#[derive(Clone, PartialEq, Props)]
pub struct ImageProps {
    pub name: String,
    pub ext: String,
    #[props(default)]
    pub folder: String,
    pub src: Option<String>,
    pub alt: String,
    pub class: Option<String>,
}

#[component]
pub fn Image(props: ImageProps) -> Element {
    let path = resolve_image_path(&props.name, &props.ext, &props.folder, props.src.as_deref());

    rsx! {
        img { src: "{path}", alt: "{props.alt}", class: props.class }
    }
}
