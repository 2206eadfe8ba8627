use typeschema::{SchemaError, TypeMapper, impl_reflect};

/// # Self-referential records
///
/// A linked list refers to itself through `Option<Box<Self>>`.  Boxes and
/// options are transparent, so the mapper would follow `next` forever; the
/// depth limit turns that into an error instead.
///
/// A tree that refers to itself through `Vec<Self>` maps fine because sequence
/// elements are only classified by their kind.
///
/// ```bash
/// cargo run -p typeschema --example self_reference
/// ```
////////////////////////////////////////////////////////////////////////////////

#[allow(dead_code)]
struct ListNode {
    value: i64,
    next: Option<Box<ListNode>>,
}

impl_reflect!(ListNode {
    value,
    next: "next,omitempty",
});

#[allow(dead_code)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl_reflect!(TreeNode { label, children });

fn main() -> anyhow::Result<()> {
    let mapper = TypeMapper::builder().with_max_depth(8).build()?;

    match mapper.map::<ListNode>() {
        Err(SchemaError::DepthLimitExceeded { limit, path }) => {
            println!("ListNode: gave up after {limit} levels at `{path}`");
        }
        Err(other) => return Err(other.into()),
        Ok(schema) => println!("ListNode: {schema}"),
    }

    println!("TreeNode: {}", mapper.map::<TreeNode>()?);

    Ok(())
}
