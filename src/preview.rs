use crate::vfs::VirtualFS;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::rc::Rc;
use treeline::render::{child_prefix, pointer};

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Build the directory tree from the VFS entries, returning the root node.
///
/// Entries listed twice are shown once, and parents that never got a line of
/// their own (a label such as `a/b/c.txt`) are added as directories.
fn build_tree(vfs: &VirtualFS, destination: &Path) -> Rc<RefCell<TreeNode>> {
    // create a root node to represent the 'destination' directory
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    // map relative path to node
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();

    for entry in &vfs.entries {
        let components: Vec<_> = entry
            .destination
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name),
                _ => None,
            })
            .collect();

        let mut relative = PathBuf::new();
        let mut parent = Rc::clone(&root);

        for (i, name) in components.iter().enumerate() {
            relative.push(name);

            let node = match lookup.get(&relative) {
                Some(node) => Rc::clone(node),
                None => {
                    let is_file = entry.is_file && i == components.len() - 1;
                    let new_child = Rc::new(RefCell::new(TreeNode::new(
                        name.to_string_lossy().to_string(),
                        is_file,
                    )));

                    parent.borrow_mut().children.push(Rc::clone(&new_child));
                    lookup.insert(relative.clone(), Rc::clone(&new_child));

                    new_child
                }
            };

            parent = node;
        }
    }

    root
}

/// Collect the tree's lines with a nice coloured style.
fn tree_lines(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    let node_borrow = node.borrow();

    let connector = pointer(is_last).yellow();
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        format!("{}/", node_borrow.name).blue()
    };
    lines.push(format!("{}{}{}", prefix.yellow(), connector, name));

    let next_prefix = child_prefix(prefix, is_last);

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        let last = i == len - 1;
        tree_lines(child, &next_prefix, last, lines);
    }
}

/// Renders the planned entries under `destination`, one line per node.
pub fn render_preview(vfs: &VirtualFS, destination: &Path) -> Vec<String> {
    let tree_root = build_tree(vfs, destination);

    let mut lines = Vec::new();
    tree_lines(&tree_root, "", true, &mut lines);

    lines
}

pub fn preview_as_tree(vfs: &VirtualFS, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    for line in render_preview(vfs, destination) {
        println!("{}", line);
    }

    println!("\n{}", "└─".bold().bright_blue());
}
