use rs_domext::dom::{self, first_node, Document, NodeRef};
use rs_domext::{Content, DomExt, LiveChildren, LiveCollection, LiveQuery, TreeNode};

fn at<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
    first_node(doc, selector).expect("selector should match")
}

fn texts(nodes: &[NodeRef]) -> Vec<String> {
    nodes.iter().map(|n| n.text().to_string()).collect()
}

#[test]
fn moving_live_children_empties_the_source_and_keeps_order() {
    let doc = dom::parse(
        r#"<ul id="src"><li>1</li><li>2</li><li>3</li><li>4</li></ul><ol id="dst"><li>0</li></ol>"#,
    );
    let src = at(&doc, "#src");
    let dst = at(&doc, "#dst");
    let ext = DomExt::default();
    let live = LiveChildren::new(src);

    ext.append(&dst, Content::live(&live), false);

    assert!(live.is_empty());
    assert!(src.children().is_empty());
    assert_eq!(texts(&dst.element_children()), ["0", "1", "2", "3", "4"]);
}

#[test]
fn live_members_land_before_the_reference_in_order() {
    let doc = dom::parse(
        r#"<ul id="src"><li>b</li><li>c</li></ul><ol id="dst"><li id="a">a</li><li id="z">z</li></ol>"#,
    );
    let dst = at(&doc, "#dst");
    let ext = DomExt::default();
    let live = LiveChildren::new(at(&doc, "#src"));

    ext.insert_after(&dst, Content::live(&live), &at(&doc, "#a"), false);

    assert_eq!(texts(&dst.element_children()), ["a", "b", "c", "z"]);
}

#[test]
fn live_query_results_move_out_of_their_root() {
    let doc = dom::parse(
        r#"<div id="root"><p class="m">1</p><p>skip</p><section><p class="m">2</p></section></div><div id="dst"></div>"#,
    );
    let root = at(&doc, "#root");
    let dst = at(&doc, "#dst");
    let ext = DomExt::default();
    let selector = <NodeRef as TreeNode>::compile_selector("p.m").expect("valid selector");
    let live = LiveQuery::new(root, selector);

    ext.append(&dst, Content::live(&live), false);

    assert!(live.is_empty());
    assert_eq!(texts(&dst.element_children()), ["1", "2"]);
    assert_eq!(doc.select("#root p").length(), 1);
}

#[test]
fn a_stable_cursor_over_the_same_view_would_skip_members() {
    // Reading index i after moving i-1 skips every other member; this is
    // the behavior the live drain avoids.
    let doc = dom::parse(
        r#"<ul id="src"><li>1</li><li>2</li><li>3</li><li>4</li></ul><ol id="dst"></ol>"#,
    );
    let dst = at(&doc, "#dst");
    let live = LiveChildren::new(at(&doc, "#src"));

    let mut index = 0;
    while let Some(item) = live.item(index) {
        dst.push_child(&item);
        index += 1;
    }

    assert_eq!(texts(&dst.element_children()), ["1", "3"]);
}

#[test]
fn draining_a_container_into_itself_terminates() {
    let doc = dom::parse(r#"<ul id="list"><li>1</li><li>2</li><li>3</li></ul>"#);
    let list = at(&doc, "#list");
    let ext = DomExt::default();
    let live = LiveChildren::new(list);

    ext.append(&list, Content::live(&live), false);

    assert_eq!(texts(&list.element_children()), ["1", "2", "3"]);
}

#[test]
fn empty_live_collection_is_a_no_op() {
    let doc = dom::parse(r#"<ul id="src"></ul><ol id="dst"><li>0</li></ol>"#);
    let dst = at(&doc, "#dst");
    let ext = DomExt::default();
    let live = LiveChildren::new(at(&doc, "#src"));

    let returned = ext.prepend(&dst, Content::live(&live), false);

    assert!(returned.same_node(&dst));
    assert_eq!(texts(&dst.element_children()), ["0"]);
}

#[test]
fn escaped_live_collection_copies_text_and_keeps_members() {
    let doc = dom::parse(r#"<ul id="src"><li>1</li><li>2</li></ul><div id="dst"></div>"#);
    let dst = at(&doc, "#dst");
    let ext = DomExt::default();
    let live = LiveChildren::new(at(&doc, "#src"));

    ext.append(&dst, Content::live(&live), true);

    assert_eq!(live.len(), 2);
    assert_eq!(dst.text().as_ref(), "<li>1</li><li>2</li>");
    assert!(doc.select("#dst li").is_empty());
}

#[test]
fn prepending_a_container_to_itself_keeps_every_member() {
    let doc = dom::parse(r#"<ul id="list"><li>1</li><li>2</li><li>3</li></ul>"#);
    let list = at(&doc, "#list");
    let live = LiveChildren::new(list);

    DomExt::default().prepend(&list, Content::live(&live), false);

    assert_eq!(texts(&list.element_children()), ["1", "2", "3"]);
}

#[test]
fn inserting_live_members_before_one_of_them_keeps_them_in_place() {
    let doc = dom::parse(
        r#"<div id="d"><p id="a" class="m">a</p><p id="b" class="m">b</p><p id="c">c</p></div>"#,
    );
    let d = at(&doc, "#d");
    let selector = <NodeRef as TreeNode>::compile_selector(".m").expect("valid selector");
    let live = LiveQuery::new(d, selector);

    DomExt::default().insert_before(&d, Content::live(&live), &at(&doc, "#b"), false);

    assert_eq!(texts(&d.element_children()), ["a", "b", "c"]);
}

#[test]
fn inserting_live_members_after_a_node_whose_successor_is_a_member() {
    let doc = dom::parse(
        r#"<div id="d"><p id="a" class="m">a</p><p id="b" class="m">b</p><p id="c">c</p></div>"#,
    );
    let d = at(&doc, "#d");
    let selector = <NodeRef as TreeNode>::compile_selector(".m").expect("valid selector");
    let live = LiveQuery::new(d, selector);

    DomExt::default().insert_after(&d, Content::live(&live), &at(&doc, "#a"), false);

    assert_eq!(texts(&d.element_children()), ["a", "b", "c"]);
}

#[test]
fn inserting_a_partial_live_collection_before_its_first_member() {
    let doc = dom::parse(
        r#"<div id="d"><p>x</p><p class="m">a</p><p>y</p><p class="m">b</p><p>z</p></div>"#,
    );
    let d = at(&doc, "#d");
    let selector = <NodeRef as TreeNode>::compile_selector(".m").expect("valid selector");
    let live = LiveQuery::new(d, selector);

    DomExt::default().insert_before(&d, Content::live(&live), &at(&doc, "p.m"), false);

    assert_eq!(live.len(), 2);
    assert_eq!(texts(&d.element_children()), ["x", "a", "b", "y", "z"]);
}

#[test]
fn replacing_a_member_with_its_own_collection_keeps_every_member() {
    let doc = dom::parse(r#"<ul id="list"><li id="a">1</li><li>2</li><li>3</li></ul>"#);
    let list = at(&doc, "#list");
    let a = at(&doc, "#a");
    let live = LiveChildren::new(list);

    let returned = DomExt::default()
        .replace(&a, Content::live(&live), false)
        .expect("a is attached");

    assert!(returned.same_node(&a));
    assert_eq!(texts(&list.element_children()), ["1", "2", "3"]);
}
