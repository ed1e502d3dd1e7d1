use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::loading_spinner::LoadingSpinner;
use crate::config::is_mobile;

/// Lowest zoom the mobile map is allowed to back out to.
pub const MIN_MOBILE_ZOOM: u8 = 10;
/// Map tiles visible across the frame at any zoom.
const TILES_ACROSS: f64 = 3.0;
/// The frame is mounted after a short delay so it does not compete with
/// first paint.
const MAP_LOAD_DELAY_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

/// Box around a point that shows roughly the area a tiled map would at
/// `zoom`.
pub fn bounding_box(lat: f64, lng: f64, zoom: u8) -> BoundingBox {
    let tile_degrees = 360.0 / 2f64.powi(i32::from(zoom));
    let half_lng = tile_degrees * TILES_ACROSS / 2.0;
    let half_lat = half_lng * lat.to_radians().cos();
    BoundingBox {
        west: lng - half_lng,
        south: lat - half_lat,
        east: lng + half_lng,
        north: lat + half_lat,
    }
}

/// Small screens get a slightly wider view.
pub fn effective_zoom(zoom: u8, mobile: bool) -> u8 {
    if mobile {
        zoom.saturating_sub(1).max(MIN_MOBILE_ZOOM)
    } else {
        zoom
    }
}

pub fn embed_url(lat: f64, lng: f64, zoom: u8) -> String {
    let bbox = bounding_box(lat, lng, zoom);
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={:.5}%2C{:.5}%2C{:.5}%2C{:.5}&layer=mapnik&marker={:.5}%2C{:.5}",
        bbox.west, bbox.south, bbox.east, bbox.north, lat, lng
    )
}

#[derive(Properties, PartialEq)]
pub struct MapEmbedProps {
    pub lat: f64,
    pub lng: f64,
    #[prop_or(15)]
    pub zoom: u8,
    #[prop_or(AttrValue::Static("400px"))]
    pub height: AttrValue,
    #[prop_or_default]
    pub title: AttrValue,
}

#[function_component(MapEmbed)]
pub fn map_embed(props: &MapEmbedProps) -> Html {
    let (width, _) = use_window_size();
    let mounted = use_state(|| false);
    let loaded = use_state(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(MAP_LOAD_DELAY_MS, move || mounted.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let zoom = effective_zoom(props.zoom, is_mobile(width));
    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    html! {
        <div class="map-embed" style={format!("height: {};", props.height)}>
            if !*loaded {
                <div class="map-embed-placeholder">
                    <LoadingSpinner label="Loading map..." />
                </div>
            }
            if *mounted {
                <iframe
                    src={embed_url(props.lat, props.lng, zoom)}
                    title={props.title.clone()}
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                    class={classes!((*loaded).then(|| "is-loaded"))}
                    {onload}
                ></iframe>
            }
            <style>
                {r#"
                .map-embed {
                    position: relative;
                    width: 100%;
                    min-height: 300px;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                }

                .map-embed-placeholder {
                    position: absolute;
                    inset: 0;
                }

                .map-embed iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }

                .map-embed iframe.is-loaded {
                    opacity: 1;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_zoom_backs_out_but_not_past_minimum() {
        assert_eq!(effective_zoom(15, false), 15);
        assert_eq!(effective_zoom(15, true), 14);
        assert_eq!(effective_zoom(10, true), 10);
        assert_eq!(effective_zoom(3, true), 10);
        assert_eq!(effective_zoom(0, true), 10);
    }

    #[test]
    fn bounding_box_is_centred() {
        let bbox = bounding_box(28.6332, 77.2194, 15);
        assert!(((bbox.west + bbox.east) / 2.0 - 77.2194).abs() < 1e-9);
        assert!(((bbox.south + bbox.north) / 2.0 - 28.6332).abs() < 1e-9);
        assert!(bbox.north - bbox.south < bbox.east - bbox.west);
    }

    #[test]
    fn each_zoom_level_halves_the_span() {
        let wide = bounding_box(0.0, 0.0, 14);
        let close = bounding_box(0.0, 0.0, 15);
        let ratio = (wide.east - wide.west) / (close.east - close.west);
        assert!((ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn embed_url_marks_the_location() {
        let url = embed_url(28.6332, 77.2194, 15);
        assert!(url.starts_with("https://www.openstreetmap.org/export/embed.html?bbox="));
        assert!(url.ends_with("&layer=mapnik&marker=28.63320%2C77.21940"));
    }
}
