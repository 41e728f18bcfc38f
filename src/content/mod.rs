pub mod cache;
pub mod model;
pub mod service;
pub mod transform;

pub use model::{Carousel, CarouselItem, RawCarousel, RawItem};
pub use service::CarouselService;
pub use transform::transform_carousels;
