use std::fmt::Display;
use std::path::Path;

use serde::Serialize;
use tramp_tree::strategy::thunk::Call;
use tramp_tree::trampoline::{self, Bounce};
use tramp_tree::{BinaryTree, Continuation, Strategy, Tree};

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "typ", rename_all = "snake_case")]
pub enum VizAction {
    // the trampoline is about to traverse `subtree`
    Traverse { subtree: String, chain: Vec<String> },
    // the trampoline is about to hand `result` to the innermost link of `chain`
    Apply { result: String, chain: Vec<String> },
    // info text display!
    InfoCard {
        info_header: String,
        info_txt: String,
    },
}

/// Step by step record of one trampolined traversal.
#[derive(Clone, Debug, Serialize)]
pub struct Viz {
    strategy: Strategy,
    seed_txt: String,
    actions: Vec<VizAction>,
}

impl Viz {
    pub fn actions(&self) -> &[VizAction] {
        &self.actions
    }

    pub fn seed_txt(&self) -> &str {
        &self.seed_txt
    }

    /// Prepend an info card.
    pub fn label(mut self, info_header: String, info_txt: String) -> Self {
        self.actions.insert(
            0,
            VizAction::InfoCard {
                info_header,
                info_txt,
            },
        );
        self
    }

    pub fn serialize_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn serialize_html(&self) -> serde_json::Result<String> {
        let mut out = String::new();
        out.push_str(TEMPLATE_BEFORE);
        out.push_str(&self.serialize_json()?);
        out.push_str(TEMPLATE_AFTER);
        Ok(out)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let html = self.serialize_html()?;
        std::fs::write(path, html)
    }
}

/// Run the trampolined traversal over `tree`, recording every bounce.
pub fn traverse_v<V, O>(tree: &BinaryTree<V>, map: impl Fn(&V) -> O) -> (Vec<O>, Viz)
where
    V: Display,
    O: Display,
{
    let mut actions = Vec::new();
    let start = Bounce::Pending(Call::Traverse {
        root: tree.root(),
        map: &map,
        cont: Continuation::Done,
    });

    let out = trampoline::run_observed(start, |call| {
        actions.push(match call {
            Call::Traverse { root, cont, .. } => VizAction::Traverse {
                subtree: render_tree(*root),
                chain: render_chain(cont),
            },
            Call::Apply { cont, result } => VizAction::Apply {
                result: render_list(result),
                chain: render_chain(cont),
            },
        })
    });

    actions.push(VizAction::InfoCard {
        info_header: "Completed".to_string(),
        info_txt: format!("result: {}", render_list(&out)),
    });

    let viz = Viz {
        strategy: Strategy::Thunk,
        seed_txt: render_tree(tree.root()),
        actions,
    };
    (out, viz)
}

/// `(left value right)` for internal nodes, `_` for empty subtrees.
pub fn render_tree<V: Display>(tree: &Tree<V>) -> String {
    enum Token<'a, V> {
        Tree(&'a Tree<V>),
        Value(&'a V),
        Text(&'static str),
    }

    let mut out = String::new();
    let mut todo = vec![Token::Tree(tree)];
    while let Some(token) = todo.pop() {
        match token {
            Token::Tree(Tree::Empty) => out.push('_'),
            Token::Tree(Tree::Leaf(v)) | Token::Value(v) => out.push_str(&v.to_string()),
            Token::Tree(Tree::Node(left, v, right)) => todo.extend([
                Token::Text(")"),
                Token::Tree(&**right),
                Token::Text(" "),
                Token::Value(v),
                Token::Text(" "),
                Token::Tree(&**left),
                Token::Text("("),
            ]),
            Token::Text(s) => out.push_str(s),
        }
    }
    out
}

/// One label per link of `cont`, innermost first. `Done` contributes nothing.
pub fn render_chain<V: Display, O: Display>(cont: &Continuation<'_, V, O>) -> Vec<String> {
    let mut labels = Vec::new();
    let mut cursor = cont;
    loop {
        match cursor {
            Continuation::Done => return labels,
            Continuation::Next { right, value, next, .. } => {
                labels.push(format!("next {} then {}", value, render_tree(*right)));
                cursor = &**next;
            }
            Continuation::Concat { left, value, next, .. } => {
                labels.push(format!("concat {} ++ {} ++ _", render_list(left), value));
                cursor = &**next;
            }
        }
    }
}

fn render_list<O: Display>(items: &[O]) -> String {
    let items: Vec<String> = items.iter().map(|x| x.to_string()).collect();
    format!("[{}]", items.join(", "))
}

static TEMPLATE_BEFORE: &str = r###"
<!DOCTYPE html>
<meta charset="UTF-8">
<style>

body {
  background-color: lightcyan;
  font-family: verdana;
}

.infocard {
  background-color: white;
  border-style: solid;
  width: 500px;
  padding: 10px;
  margin-bottom: 10px;
  border-radius: 10px;
}

.infocard .cardheader {
  font-size: 25px;
  padding-top: 5px;
  padding-bottom: 5px;
  border-bottom: solid;
  border-width: 5px;
}

.infocard .cardbody {
  font-size: 15px;
  padding: 10px;
  font-family: "Lucida Console", "Courier New", monospace;
  background-color: steelblue;
  color: white;
}

.link {
  width: 480px;
  margin: 4px 0;
  padding: 6px 10px;
  border: solid 3px mediumVioletRed;
  border-radius: 4px;
  background-color: white;
  font-family: "Lucida Console", "Courier New", monospace;
}

</style>

<body>

<div id="titlecard" class="infocard">
  <div class="cardheader">header</div>
  <div class="cardbody">body</div>
</div>

<div id="callcard" class="infocard">
  <div class="cardheader">pending call</div>
  <div class="cardbody">-</div>
</div>

<div id="chain"></div>

<!-- load the d3.js library -->
<script src="https://d3js.org/d3.v7.js"></script>
<script>

const data = "###;

static TEMPLATE_AFTER: &str = r###";

 d3.select("#titlecard .cardheader").text("tree");
 d3.select("#titlecard .cardbody").text(data.seed_txt);

 var actions = data.actions;

 function flash(selector) {
     d3.select(selector)
       .transition().duration(500)
       .style("border-color", "mediumvioletred")
       .transition().duration(1000)
       .style("border-color", "black");
 }

 function showChain(chain) {
     var links = d3.select("#chain").selectAll("div.link").data(chain);
     links.enter().append("div").attr("class", "link").merge(links).text(function(d) { return d; });
     links.exit().remove();
 }

 let intervalId = setInterval(function () {
     var next = actions.shift();
     if (!next) {
         clearInterval(intervalId);
         return;
     }
     if (next.typ == "info_card") {
         d3.select("#titlecard .cardheader").text(next.info_header);
         d3.select("#titlecard .cardbody").text(next.info_txt);
         flash("#titlecard");
     } else if (next.typ == "traverse") {
         d3.select("#callcard .cardheader").text("traverse");
         d3.select("#callcard .cardbody").text(next.subtree);
         showChain(next.chain);
         flash("#callcard");
     } else {
         d3.select("#callcard .cardheader").text("apply");
         d3.select("#callcard .cardbody").text(next.result);
         showChain(next.chain);
         flash("#callcard");
     }
 }, 600);

</script>
</body>
"###;
