//! Basic build -> query flow.

use graph_paths::*;

fn main() -> GraphResult<()> {
    // Road map: undirected edges weighted by distance
    let mut builder = GraphBuilder::new();
    builder
        .labeled_edge("home", "bakery", 2u64)
        .labeled_edge("bakery", "office", 9)
        .labeled_edge("home", "park", 4)
        .labeled_edge("park", "station", 1)
        .labeled_edge("station", "office", 2)
        .node("island");

    let graph = builder.build()?;

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let query = QueryEngine::new();
    let params = PathParams::new("home", "office");

    println!("\nAll routes from home to office:");
    for path in query.all_paths(&graph, &params)? {
        println!("  {}", path.join(" -> "));
    }

    if let Some(route) = query.shortest_route(&graph, &params)? {
        println!(
            "\nShortest: {} (distance {}, {} hops)",
            route.nodes.join(" -> "),
            route.cost,
            route.hops()
        );
    }

    let fewest = query.shortest_path_unweighted(&graph, &params)?;
    println!("Fewest hops: {}", fewest.join(" -> "));

    let unreachable = query.shortest_path(&graph, &PathParams::new("home", "island"))?;
    println!("\nhome -> island reachable: {}", !unreachable.is_empty());

    Ok(())
}
