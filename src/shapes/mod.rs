//! Request, result and structure shapes, grouped by service area.

pub mod associations;
pub mod commands;
pub mod common;
pub mod compliance;
pub mod documents;
pub mod instances;
pub mod maintenance_windows;
pub mod parameters;
pub mod patch;
pub mod sessions;

pub use self::associations::*;
pub use self::commands::*;
pub use self::common::*;
pub use self::compliance::*;
pub use self::documents::*;
pub use self::instances::*;
pub use self::maintenance_windows::*;
pub use self::parameters::*;
pub use self::patch::*;
pub use self::sessions::*;

use crate::registry::ShapeRegistry;

pub(crate) fn register_all(registry: &mut ShapeRegistry) {
    common::register_common(registry);
    parameters::register_parameters(registry);
    commands::register_commands(registry);
    associations::register_associations(registry);
    maintenance_windows::register_maintenance_windows(registry);
    documents::register_documents(registry);
    patch::register_patch(registry);
    compliance::register_compliance(registry);
    instances::register_instances(registry);
    sessions::register_sessions(registry);
}
