//! Parameter panel controls for the model, camera and star field.
//!
//! Every control is expressed as a `ParameterChangeEvent`. Events come from
//! the scene settings file at load time, the egui panel window and keyboard
//! shortcuts on native builds. A single system applies them.
//!
//! ```text
//! scene.json / Panel window / Keyboard
//!   └─> ParameterChangeEvent
//!       └─> apply_parameter_changes()
//!           ├─> ModelTransform / ModelAppearance
//!           ├─> CameraLens
//!           └─> StarField / StarFieldSettings
//! ```

/// Typed panel events and the clamping apply system.
pub mod parameter_panel;

/// Native keyboard bindings that step panel values.
pub mod panel_shortcuts;

/// egui window with a slider or colour picker per control.
pub mod panel_window;
