pub const SHAPE_2D_SHADER: &str = include_str!("shape2d.wgsl");

#[cfg(test)]
mod tests {
    use naga::valid::{Capabilities, ValidationFlags, Validator};

    macro_rules! test_shader {
        ($fn_name:ident, $name:literal => $code:expr) => {
            #[test]
            fn $fn_name() {
                let module = naga::front::wgsl::parse_str($code)
                    .unwrap_or_else(|e| panic!("{} failed to parse: {e}", $name));

                Validator::new(ValidationFlags::all(), Capabilities::all())
                    .validate(&module)
                    .unwrap_or_else(|e| panic!("{} failed to validate: {e:?}", $name));

                let entry_points: Vec<&str> = module
                    .entry_points
                    .iter()
                    .map(|ep| ep.name.as_str())
                    .collect();
                assert!(entry_points.contains(&"vs_main"));
                assert!(entry_points.contains(&"fs_main"));
            }
        };
    }

    test_shader!(shape_2d, "Shape 2D Shader" => super::SHAPE_2D_SHADER);
}
