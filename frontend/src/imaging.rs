use gloo_events::{EventListener, EventListenerOptions};
use log::warn;
use url::form_urlencoded;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlImageElement};
use yew::prelude::*;

use crate::config::PLACEHOLDER_IMAGE;
use crate::motion::hooks::ViewObserver;

pub const SRCSET_WIDTHS: [u32; 4] = [300, 600, 900, 1200];
pub const MAX_IMAGE_WIDTH: f64 = 1200.0;
pub const ASPECT_RATIO: f64 = 4.0 / 3.0;

/// Sets query parameters on `url`, keeping the existing ones in order.
/// The query is re-serialized as `application/x-www-form-urlencoded`.
fn with_params(url: &str, params: &[(&str, &str)]) -> String {
    let (base, query) = url.split_once('?').unwrap_or((url, ""));
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    for &(key, value) in params {
        match pairs.iter().position(|(existing, _)| existing == key) {
            Some(first) => {
                pairs[first].1 = value.to_string();
                // A set key appears once, like `URLSearchParams::set`.
                let mut index = 0;
                pairs.retain(|(existing, _)| {
                    let keep = index <= first || existing != key;
                    index += 1;
                    keep
                });
            }
            None => pairs.push((key.to_string(), value.to_string())),
        }
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&pairs)
        .finish();
    format!("{}?{}", base, query)
}

/// Responsive `srcset` for an image CDN that sizes by the `w` parameter.
pub fn srcset(url: &str) -> String {
    SRCSET_WIDTHS
        .iter()
        .map(|width| {
            let width = width.to_string();
            format!("{} {}w", with_params(url, &[("w", &width)]), width)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Tiny blurred variant shown while the real image loads.
pub fn blur_placeholder(url: &str) -> String {
    with_params(url, &[("w", "50"), ("blur", "50")])
}

/// 4:3 box for a container, capped at the largest srcset width.
pub fn image_dimensions(container_width: f64) -> (f64, f64) {
    let width = container_width.min(MAX_IMAGE_WIDTH);
    (width, width / ASPECT_RATIO)
}

/// The urls that still need a preload hint, given the hrefs already in
/// `<head>`. Each url is returned once.
pub fn missing_preloads<'a>(existing: &[String], urls: &[&'a str]) -> Vec<&'a str> {
    let mut missing: Vec<&'a str> = Vec::new();
    for &url in urls {
        if !existing.iter().any(|href| href == url) && !missing.contains(&url) {
            missing.push(url);
        }
    }
    missing
}

fn preloaded_hrefs(head: &Element) -> Vec<String> {
    let Ok(links) = head.query_selector_all("link[rel=\"preload\"]") else {
        return Vec::new();
    };
    (0..links.length())
        .filter_map(|index| links.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|link| link.get_attribute("href"))
        .collect()
}

/// Adds `<link rel="preload" as="image">` hints for above-the-fold images,
/// skipping urls that already have one.
pub fn preload_images(urls: &[&str]) {
    let Some(document) = window().and_then(|window| window.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };
    for url in missing_preloads(&preloaded_hrefs(&head), urls) {
        let Ok(link) = document.create_element("link") else {
            continue;
        };
        let _ = link.set_attribute("rel", "preload");
        let _ = link.set_attribute("as", "image");
        let _ = link.set_attribute("href", url);
        if head.append_child(&link).is_err() {
            warn!("could not add preload hint for {}", url);
        }
    }
}

/// Swaps any image that fails to load for the placeholder, for as long as
/// the calling component is mounted.
#[hook]
pub fn use_image_fallback() {
    use_effect_with_deps(
        |_| {
            let listener = window().and_then(|window| window.document()).map(|document| {
                // `error` does not bubble, so listen in the capture phase.
                EventListener::new_with_options(
                    &document,
                    "error",
                    EventListenerOptions::run_in_capture_phase(),
                    |event| {
                        let Some(image) = event
                            .target()
                            .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
                        else {
                            return;
                        };
                        if image.src().ends_with(PLACEHOLDER_IMAGE) {
                            return;
                        }
                        warn!("image failed to load: {}", image.src());
                        image.set_src(PLACEHOLDER_IMAGE);
                        image.set_alt("Image placeholder");
                    },
                )
            });
            move || drop(listener)
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::from("(max-width: 768px) 100vw, 50vw"))]
    pub sizes: AttrValue,
}

/// Image that loads its full `srcset` only when close to the viewport.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let in_view = use_state(|| false);
    let loaded = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let setter = in_view.setter();
                    ViewObserver::once(&element, "50px", 0.1, move || setter.set(true))
                });
                if observer.is_none() {
                    in_view.set(true);
                }
                move || drop(observer)
            },
            node.clone(),
        );
    }

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    let (src, src_set) = if *in_view {
        (props.src.to_string(), Some(srcset(&props.src)))
    } else {
        (blur_placeholder(&props.src), None)
    };

    html! {
        <div ref={node} class={classes!("lazy-image", props.class.clone())}>
            <img
                src={src}
                srcset={src_set}
                sizes={props.sizes.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                class={classes!(loaded.then_some("is-loaded"))}
                {onload}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srcset_sets_width_and_keeps_other_params() {
        let set = srcset("https://images.example.com/photo-1?auto=format&fit=crop&w=800&q=80");
        let entries: Vec<&str> = set.split(", ").collect();
        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[0],
            "https://images.example.com/photo-1?auto=format&fit=crop&w=300&q=80 300w"
        );
        assert_eq!(
            entries[3],
            "https://images.example.com/photo-1?auto=format&fit=crop&w=1200&q=80 1200w"
        );
    }

    #[test]
    fn srcset_appends_width_when_missing() {
        assert_eq!(
            srcset("/cafe.jpg").split(", ").next(),
            Some("/cafe.jpg?w=300 300w")
        );
    }

    #[test]
    fn blur_placeholder_shrinks_and_blurs() {
        assert_eq!(
            blur_placeholder("https://images.example.com/a?w=800&q=80"),
            "https://images.example.com/a?w=50&q=80&blur=50"
        );
    }

    #[test]
    fn dimensions_cap_width_and_keep_ratio() {
        let (width, height) = image_dimensions(600.0);
        assert_eq!(width, 600.0);
        assert!((height - 450.0).abs() < 1e-9);

        let (width, height) = image_dimensions(2400.0);
        assert_eq!(width, 1200.0);
        assert!((height - 900.0).abs() < 1e-9);
    }

    #[test]
    fn existing_query_is_form_encoded() {
        assert_eq!(
            srcset("https://x/a.jpg?txt=a%20b&fit=crop,edges").split(", ").next(),
            Some("https://x/a.jpg?txt=a+b&fit=crop%2Cedges&w=300 300w")
        );
    }

    #[test]
    fn repeated_width_collapses_to_one() {
        assert_eq!(
            blur_placeholder("/a.jpg?w=800&q=80&w=1600"),
            "/a.jpg?w=50&q=80&blur=50"
        );
    }

    #[test]
    fn preloads_skip_existing_and_repeated_urls() {
        let existing = vec!["/hero.jpg".to_string()];
        assert_eq!(
            missing_preloads(&existing, &["/hero.jpg", "/about.jpg", "/about.jpg"]),
            vec!["/about.jpg"]
        );
        assert!(missing_preloads(&existing, &["/hero.jpg"]).is_empty());
    }
}
