use regex::Regex;

use crate::content::model::{Carousel, CarouselItem, RawCarousel};

/// Prepare raw API carousels for display.
///
/// Assigns stable ids (`carousel-{index}` / `{type}-item-{itemIndex}`),
/// derives `has_video` from a non-empty video URL and repairs known-broken
/// image hosts. Input order is preserved.
pub fn transform_carousels(raw: Vec<RawCarousel>) -> Vec<Carousel> {
    raw.into_iter()
        .enumerate()
        .map(|(index, carousel)| {
            let items = carousel
                .items
                .into_iter()
                .enumerate()
                .map(|(item_index, item)| CarouselItem {
                    id: format!("{}-item-{}", carousel.kind, item_index),
                    has_video: item.video_url.as_deref().is_some_and(|url| !url.is_empty()),
                    image_url: fix_broken_image_url(item.image_url.as_deref()),
                    title: item.title,
                    description: item.description,
                    video_url: item.video_url,
                    extra: item.extra,
                })
                .collect();

            Carousel {
                id: format!("carousel-{}", index),
                title: carousel.title,
                kind: carousel.kind,
                items,
                extra: carousel.extra,
            }
        })
        .collect()
}

/// Repair image URLs from hosts that no longer serve content.
///
/// placeimg.com shut down; its `/{width}/{height}` URLs map onto
/// picsum.photos. Everything else merely gets upgraded from http to https.
/// Absent or empty input stays absent.
pub fn fix_broken_image_url(url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;

    let placeimg = Regex::new(r"(?i)^https?://placeimg\.com/(\d+)/(\d+)").unwrap();
    if let Some(caps) = placeimg.captures(url) {
        return Some(format!("https://picsum.photos/{}/{}", &caps[1], &caps[2]));
    }

    let insecure = Regex::new(r"(?i)^http://").unwrap();
    Some(insecure.replace(url, "https://").into_owned())
}
