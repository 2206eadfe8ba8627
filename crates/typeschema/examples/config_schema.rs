use std::collections::HashMap;

use typeschema::{TypeMapperBuilder, impl_reflect};

/// # Publishing a config schema
///
/// Describes a small service configuration and prints its schema twice:
///
/// 1. as the native JSON document (two-space indented),
/// 2. as a standard draft-07 document rendered in YAML, which is what most
///    editors pick up for config-file completion.
///
/// ## How to run
///
/// ```bash
/// cargo run -p typeschema --example config_schema
/// TYPESCHEMA_MAX_DEPTH=4 cargo run -p typeschema --example config_schema
/// ```
////////////////////////////////////////////////////////////////////////////////

#[allow(dead_code)]
struct Listener {
    host: String,
    port: u16,
    tls: bool,
}

impl_reflect!(Listener {
    host,
    port,
    tls: "tls,omitempty",
});

#[allow(dead_code)]
struct ServiceConfig {
    name: String,
    listener: Listener,
    upstreams: Vec<String>,
    limits: HashMap<String, u32>,
    secret: Vec<u8>,
}

impl_reflect!(ServiceConfig {
    name,
    listener,
    upstreams: "upstreams,omitempty",
    limits: "limits,omitempty",
    secret: "secret_key",
});

fn main() -> anyhow::Result<()> {
    let mapper = TypeMapperBuilder::new_from_env().build()?;
    let schema = mapper.map::<ServiceConfig>()?;

    println!("{schema}");
    println!("---");
    println!("{}", serde_yaml::to_string(&schema.to_root_schema())?);

    Ok(())
}
