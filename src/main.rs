use anyhow::Result;
use decomp_graph::{
    DirectedGraph, GraphConfig, GraphDecomposition, Hypergraph, LabelValue, MultiHypergraph,
};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Decomp Graph v{}", decomp_graph::version());
    println!("==========================================");
    println!();

    let config = GraphConfig::from_json_str(r#"{ "vertex_capacity_hint": 16 }"#)?;

    // Demo 1: Hypergraph
    let graph = demo_hypergraph(&config)?;

    // Demo 2: Directed graph
    demo_directed_graph(&config)?;

    // Demo 3: Decomposition
    demo_decomposition(&config, &graph)?;

    Ok(())
}

fn demo_hypergraph(config: &GraphConfig) -> Result<MultiHypergraph> {
    println!("=== Demo 1: Hypergraph ===");
    let mut graph = MultiHypergraph::with_config(config);

    let first = graph.add_vertices(5);
    let v: Vec<_> = graph.vertices().collect();
    println!("✓ Created 5 vertices starting at {}", first);

    graph.add_hyperedge(vec![v[0], v[1], v[2]])?;
    graph.add_edge(v[2], v[3])?;
    graph.add_edge(v[2], v[3])?;
    graph.add_edge(v[3], v[4])?;
    println!("✓ Created {} hyperedges (one parallel pair)", graph.edge_count());

    println!("  Neighbors of {}: {:?}", v[2], graph.neighbors(v[2])?);
    println!("  Connected: {}", graph.is_connected());
    println!();

    Ok(graph)
}

fn demo_directed_graph(config: &GraphConfig) -> Result<()> {
    println!("=== Demo 2: Directed Graph ===");
    let mut order = DirectedGraph::with_config(config);

    order.add_vertices(4);
    let v: Vec<_> = order.vertices().collect();
    let e01 = order.add_edge(v[0], v[1])?;
    order.add_edge(v[1], v[2])?;
    order.add_edge(v[2], v[3])?;

    println!("✓ Chain {} -> {} -> {} -> {}", v[0], v[1], v[2], v[3]);
    println!("  {} reaches {}: {}", v[0], v[3], order.is_reachable(v[0], v[3])?);

    order.remove_edge(e01)?;
    println!("✓ Removed edge {}", e01);
    println!("  {} reaches {}: {}", v[0], v[3], order.is_reachable(v[0], v[3])?);
    println!();

    Ok(())
}

fn demo_decomposition(config: &GraphConfig, graph: &MultiHypergraph) -> Result<()> {
    println!("=== Demo 3: Decomposition ===");
    let mut decomposition = GraphDecomposition::with_config(config);

    let v: Vec<_> = graph.vertices().collect();
    let left = decomposition.add_node(vec![v[0], v[1], v[2]]);
    let middle = decomposition.add_node(vec![v[2], v[3]]);
    let right = decomposition.add_node(vec![v[3], v[4]]);
    decomposition.add_node_edge(left, middle)?;
    decomposition.add_node_edge(middle, right)?;
    decomposition.set_vertex_label("introduced", right, LabelValue::Vertices(vec![v[4]]))?;

    for node in decomposition.nodes() {
        let induced = decomposition.induced_hyperedges(node, graph)?;
        println!(
            "  Node {} bag {:?} induces {:?}",
            node,
            decomposition.bag_content(node)?,
            induced.ids()
        );
    }

    println!(
        "✓ Bag sizes: min {}, max {}",
        decomposition.minimum_bag_size(),
        decomposition.maximum_bag_size()
    );
    if let Some(introduced) = decomposition.vertex_label("introduced", right) {
        println!("  Node {} introduces {}", right, introduced);
    }

    Ok(())
}
