//! Plugin templates embedded at compile time.

/// `(name, source)` pairs, in generation order.
pub const TEMPLATES: [(&str, &str); 6] = [
    ("Processor.h", include_str!("../../templates/Processor.h")),
    ("Processor.cpp", include_str!("../../templates/Processor.cpp")),
    ("Parameters.h", include_str!("../../templates/Parameters.h")),
    ("Parameters.cpp", include_str!("../../templates/Parameters.cpp")),
    ("Editor.h", include_str!("../../templates/Editor.h")),
    ("Editor.cpp", include_str!("../../templates/Editor.cpp")),
];
