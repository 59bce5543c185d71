use super::*;
use crate::chart::ItemStyle;
use serde_json::Value;

fn sample_chart() -> ChartGraph {
    ChartGraph {
        nodes: vec![
            ChartNode {
                name: "1".to_string(),
                value: 1,
                symbol_size: 20,
                item_style: ItemStyle {
                    color: "1".to_string(),
                },
                x: 200.0,
                y: 200.0,
            },
            ChartNode {
                name: "86".to_string(),
                value: 86,
                symbol_size: 20,
                item_style: ItemStyle {
                    color: "56".to_string(),
                },
                x: 190.0,
                y: 210.0,
            },
        ],
        links: vec![ChartLink {
            source: 0,
            target: 1,
        }],
    }
}

fn render_value(renderer: &ChartJsonRenderer, chart: &ChartGraph) -> Value {
    serde_json::from_str(&renderer.render(chart).unwrap()).unwrap()
}

#[test]
fn test_document_shape() {
    let v = render_value(&ChartJsonRenderer::default(), &sample_chart());
    assert_eq!(v["title"], "heap graph");
    let series = &v["series"][0];
    assert_eq!(series["type"], "graph");
    assert_eq!(series["name"], "graph");
    assert_eq!(series["layout"], "force");
    assert_eq!(series["roam"], true);
    assert_eq!(series["force"]["repulsion"], 100.0);
    assert_eq!(series["data"].as_array().unwrap().len(), 2);
    assert_eq!(series["links"][0]["source"], 0);
    assert_eq!(series["links"][0]["target"], 1);
}

#[test]
fn test_node_fields() {
    let v = render_value(&ChartJsonRenderer::default(), &sample_chart());
    let node = &v["series"][0]["data"][1];
    assert_eq!(node["name"], "86");
    assert_eq!(node["value"], 86);
    assert_eq!(node["itemStyle"]["color"], "56");
    assert_eq!(node["symbolSize"], 20);
    assert_eq!(node["y"], 210.0);
}

#[test]
fn test_options_override() {
    let options = ChartOptions {
        title: "custom".to_string(),
        layout: "none".to_string(),
        roam: false,
        repulsion: 8000.0,
    };
    let v = render_value(&ChartJsonRenderer::new(options, false), &sample_chart());
    assert_eq!(v["title"], "custom");
    assert_eq!(v["series"][0]["layout"], "none");
    assert_eq!(v["series"][0]["roam"], false);
    assert_eq!(v["series"][0]["force"]["repulsion"], 8000.0);
}

#[test]
fn test_empty_chart_has_empty_arrays() {
    let v = render_value(&ChartJsonRenderer::default(), &ChartGraph::default());
    assert_eq!(v["series"][0]["data"], Value::Array(vec![]));
    assert_eq!(v["series"][0]["links"], Value::Array(vec![]));
}

#[test]
fn test_pretty_output_is_indented() {
    let compact = ChartJsonRenderer::new(ChartOptions::default(), false)
        .render(&sample_chart())
        .unwrap();
    let pretty = ChartJsonRenderer::new(ChartOptions::default(), true)
        .render(&sample_chart())
        .unwrap();
    assert!(!compact.contains('\n'));
    assert!(pretty.contains("\n  "));
    let a: Value = serde_json::from_str(&compact).unwrap();
    let b: Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
}
