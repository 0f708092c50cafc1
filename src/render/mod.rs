pub mod driver;
pub mod renderer;
pub mod view;

pub use driver::render_all;
pub use renderer::{DEFAULT_TEMPLATE, Renderer, TemplateRenderer};
pub use view::{AttributeView, EntityView, RelationshipView, entity_views, model_json};
