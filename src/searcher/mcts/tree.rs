//! Arena-backed search tree. Nodes refer to each other by `NodeId`, and the
//! whole tree is dropped in one go when the search returns.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub(crate) struct Node<S, M> {
    pub state: S,
    pub parent: Option<NodeId>,
    /// Move that led here from the parent; `None` for the root.
    pub mv: Option<M>,
    pub children: Vec<NodeId>,
    /// Moves not expanded yet, popped from the back.
    pub untried: Vec<M>,
    pub visits: u32,
    /// Sum of rewards, each from the side of the player who moved into this node.
    pub reward: f64,
    pub mover_is_maximizing: bool,
}

impl<S, M> Node<S, M> {
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward / self.visits as f64
        }
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }
}

pub(crate) struct Tree<S, M> {
    nodes: Vec<Node<S, M>>,
}

impl<S, M> Tree<S, M> {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new(root_state: S, untried: Vec<M>, mover_is_maximizing: bool) -> Self {
        Self {
            nodes: vec![Node {
                state: root_state,
                parent: None,
                mv: None,
                children: Vec::new(),
                untried,
                visits: 0,
                reward: 0.0,
                mover_is_maximizing,
            }],
        }
    }

    pub fn get(&self, id: NodeId) -> &Node<S, M> {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<S, M> {
        &mut self.nodes[id.0]
    }

    pub fn add_child(&mut self, parent: NodeId, mv: M, state: S, untried: Vec<M>, mover_is_maximizing: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            state,
            parent: Some(parent),
            mv: Some(mv),
            children: Vec::new(),
            untried,
            visits: 0,
            reward: 0.0,
            mover_is_maximizing,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Adds one visit and the reward to `leaf` and all of its ancestors.
    /// `maximizer_reward` is the outcome for the maximizing player; each node
    /// is credited from the side of the player who moved into it.
    pub fn backpropagate(&mut self, leaf: NodeId, maximizer_reward: f64) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = &mut self.nodes[id.0];
            node.visits += 1;
            node.reward += if node.mover_is_maximizing {
                maximizer_reward
            } else {
                1.0 - maximizer_reward
            };
            current = node.parent;
        }
    }
}
