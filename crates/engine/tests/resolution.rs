//! End-to-end resolution scenarios against scripted fake collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use engine::{
    Collaborators, DialogOracle, EngineConfig, InteractOracle, Jitter, NavOracle,
    ObstacleResolver, RouteOracle, WorldOracle, responses,
};
use path_core::{Npc, NpcId, ObjectId, ResolverConfig, RouteAnalysis, Tile, WorldObject};

struct WorldState {
    player: Tile,
    moving: bool,
    objects: Vec<WorldObject>,
    npcs: Vec<Npc>,
    unclickable: Vec<ObjectId>,
    analysis: Option<RouteAnalysis>,
    lookahead: Option<RouteAnalysis>,
    reachable: bool,
    tool_equipped: bool,
    inventory: Vec<String>,
    cursor_armed: bool,
    dialog_open: bool,
    answered: Vec<String>,
    clicks: Vec<(String, Vec<String>)>,
    npc_clicks: Vec<(String, String)>,
    minimap_clicks: Vec<Tile>,
    hovers: Vec<Tile>,
    walks: Vec<Tile>,
    walk_result: bool,
}

impl WorldState {
    fn new(player: Tile) -> Self {
        Self {
            player,
            moving: false,
            objects: Vec::new(),
            npcs: Vec::new(),
            unclickable: Vec::new(),
            analysis: None,
            lookahead: None,
            reachable: true,
            tool_equipped: false,
            inventory: Vec::new(),
            cursor_armed: false,
            dialog_open: false,
            answered: Vec::new(),
            clicks: Vec::new(),
            npc_clicks: Vec::new(),
            minimap_clicks: Vec::new(),
            hovers: Vec::new(),
            walks: Vec::new(),
            walk_result: true,
        }
    }
}

type ClickFn = Box<dyn Fn(&mut WorldState, &WorldObject, &[String]) -> bool>;
type NpcClickFn = Box<dyn Fn(&mut WorldState, &Npc, &str) -> bool>;
type AdvanceFn = Box<dyn Fn(&mut WorldState, &[&str])>;

/// Scripted world: shared interior state plus per-test reaction closures.
struct Harness {
    state: Rc<RefCell<WorldState>>,
    on_click: ClickFn,
    on_npc_click: NpcClickFn,
    on_advance: AdvanceFn,
}

impl Harness {
    fn new(player: Tile) -> Self {
        Self {
            state: Rc::new(RefCell::new(WorldState::new(player))),
            on_click: Box::new(|_, _, _| true),
            on_npc_click: Box::new(|_, _, _| true),
            on_advance: Box::new(|state, responses| {
                state.dialog_open = false;
                if let Some(first) = responses.first() {
                    state.answered.push(first.to_string());
                }
            }),
        }
    }

    fn collaborators(&self) -> Collaborators<'_> {
        Collaborators::with_all(self, self, self, self, self)
    }
}

impl RouteOracle for Harness {
    fn analyze(&self, _route: &[Tile]) -> Option<RouteAnalysis> {
        self.state.borrow().analysis
    }

    fn analyze_from(&self, _route: &[Tile], _from: Tile) -> Option<RouteAnalysis> {
        self.state.borrow().lookahead
    }

    fn closest_route_tile(&self, route: &[Tile]) -> Option<Tile> {
        let player = self.state.borrow().player;
        route.iter().copied().min_by_key(|tile| tile.distance_to(player))
    }

    fn is_reachable(&self, _from: Tile, _to: Tile, _max_steps: u32) -> bool {
        self.state.borrow().reachable
    }
}

impl WorldOracle for Harness {
    fn objects_near(&self, center: Tile, radius: i32) -> Vec<WorldObject> {
        self.state
            .borrow()
            .objects
            .iter()
            .filter(|o| o.position.distance_to(center) <= radius)
            .cloned()
            .collect()
    }

    fn objects_at(&self, tile: Tile) -> Vec<WorldObject> {
        self.state
            .borrow()
            .objects
            .iter()
            .filter(|o| o.position == tile)
            .cloned()
            .collect()
    }

    fn npc_with_action(&self, name: &str, action: &str) -> Option<Npc> {
        self.state
            .borrow()
            .npcs
            .iter()
            .find(|n| n.name == name && n.actions.iter().any(|a| a == action))
            .cloned()
    }

    fn player_tile(&self) -> Tile {
        self.state.borrow().player
    }

    fn is_player_moving(&self) -> bool {
        self.state.borrow().moving
    }

    fn is_on_screen(&self, _id: ObjectId) -> bool {
        true
    }

    fn is_clickable(&self, id: ObjectId) -> bool {
        !self.state.borrow().unclickable.contains(&id)
    }

    fn inventory_contains(&self, name: &str) -> bool {
        self.state.borrow().inventory.iter().any(|i| i == name)
    }

    fn cutting_tool_equipped(&self) -> bool {
        self.state.borrow().tool_equipped
    }

    fn action_cursor_armed(&self) -> bool {
        self.state.borrow().cursor_armed
    }
}

impl NavOracle for Harness {
    fn click_minimap(&self, tile: Tile) -> bool {
        self.state.borrow_mut().minimap_clicks.push(tile);
        true
    }

    fn hover_minimap(&self, tile: Tile) {
        self.state.borrow_mut().hovers.push(tile);
    }

    fn blind_walk(&self, tile: Tile) -> bool {
        let mut state = self.state.borrow_mut();
        state.walks.push(tile);
        state.walk_result
    }
}

impl InteractOracle for Harness {
    fn click_object(&self, object: &WorldObject, actions: &[String]) -> bool {
        let mut state = self.state.borrow_mut();
        state.clicks.push((object.name.clone(), actions.to_vec()));
        (self.on_click)(&mut state, object, actions)
    }

    fn click_npc(&self, npc: &Npc, action: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.npc_clicks.push((npc.name.clone(), action.to_string()));
        (self.on_npc_click)(&mut state, npc, action)
    }

    fn use_tool_on(&self, object: &WorldObject) -> bool {
        let mut state = self.state.borrow_mut();
        state
            .clicks
            .push((object.name.clone(), vec!["Use-tool".to_string()]));
        (self.on_click)(&mut state, object, &["Use-tool".to_string()])
    }
}

impl DialogOracle for Harness {
    fn is_open(&self) -> bool {
        self.state.borrow().dialog_open
    }

    fn advance(&self, responses: &[&str]) {
        let mut state = self.state.borrow_mut();
        (self.on_advance)(&mut state, responses);
    }
}

fn object(id: u64, name: &str, actions: &[&str], position: Tile) -> WorldObject {
    WorldObject {
        id: ObjectId(id),
        name: name.to_string(),
        actions: actions.iter().map(|a| a.to_string()).collect(),
        position,
        footprint: vec![position],
    }
}

fn npc(id: u64, name: &str, actions: &[&str], position: Tile) -> Npc {
    Npc {
        id: NpcId(id),
        name: name.to_string(),
        actions: actions.iter().map(|a| a.to_string()).collect(),
        position,
    }
}

fn fast_engine() -> EngineConfig {
    EngineConfig {
        poll_interval_ms: 1,
        clickable_wait_ms: Jitter::fixed(20),
        post_click_settle_ms: Jitter::fixed(1),
        barrier_attempts: 3,
        barrier_adjacent_settle_ms: Jitter::fixed(1),
        barrier_far_settle_ms: Jitter::fixed(1),
        door_attempts: Jitter::fixed(4),
        door_adjacency_wait_ms: Jitter::fixed(5),
        tunnel_transit_wait_ms: Jitter::fixed(10),
        hazard_clear_wait_ms: Jitter::fixed(20),
        hazard_settle_ms: Jitter::fixed(1),
        hatch_reveal_wait_ms: Jitter::fixed(20),
        hatch_search_radius: 2,
        guard_wait_ms: Jitter::fixed(20),
        guard_reach_settle_ms: Jitter::fixed(1),
        guard_exit_settle_ms: Jitter::fixed(1),
        progress_wait_ms: Jitter::fixed(30),
        hover_assist_distance: 7,
        near_object_distance: 2,
        shortcut_advance: 10,
        reachable_max_steps: 50,
    }
}

fn resolver() -> ObstacleResolver {
    ObstacleResolver::seeded(ResolverConfig::default(), fast_engine(), 7)
}

#[test]
fn generic_obstacle_resolves_end_to_end() {
    let player = Tile::new(100, 100, 0);
    let destination = Tile::new(102, 100, 0);
    let beyond = Tile::new(104, 100, 0);
    let analysis = RouteAnalysis::new(destination, destination, Some(Tile::new(103, 100, 0)));
    let advanced = RouteAnalysis::new(beyond, beyond, None);

    let mut harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Door", &["Open"], Tile::new(103, 100, 0))];
        state.analysis = Some(analysis);
    }
    harness.on_click = Box::new(move |state, _, _| {
        state.analysis = Some(advanced);
        true
    });

    let route = vec![player, destination, beyond];
    let resolved = resolver().resolve(&harness.collaborators(), &route, &analysis);

    assert!(resolved);
    let state = harness.state.borrow();
    assert_eq!(state.clicks.len(), 1);
    assert_eq!(state.clicks[0].0, "Door");
    assert_eq!(state.clicks[0].1, vec!["Open".to_string()]);
}

#[test]
fn discovery_failure_returns_false() {
    let player = Tile::new(100, 100, 0);
    let destination = Tile::new(102, 100, 0);
    let analysis = RouteAnalysis::new(destination, destination, Some(Tile::new(103, 100, 0)));

    let harness = Harness::new(player);
    harness.state.borrow_mut().analysis = Some(analysis);

    let route = vec![player, destination];
    assert!(!resolver().resolve(&harness.collaborators(), &route, &analysis));
    assert!(harness.state.borrow().clicks.is_empty());
}

#[test]
fn discovery_falls_back_to_the_next_tile() {
    let player = Tile::new(100, 100, 0);
    let destination = Tile::new(101, 100, 0);
    let next = Tile::new(104, 100, 0);
    let beyond = Tile::new(108, 100, 0);
    let analysis = RouteAnalysis::new(destination, destination, Some(next));
    let advanced = RouteAnalysis::new(beyond, beyond, None);

    let mut harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        // 4 tiles past the destination query radius, adjacent to next_tile
        state.objects = vec![object(1, "Gate", &["Open"], Tile::new(105, 100, 0))];
        state.analysis = Some(analysis);
    }
    harness.on_click = Box::new(move |state, _, _| {
        state.analysis = Some(advanced);
        true
    });

    let route = vec![player, destination, next];
    assert!(resolver().resolve(&harness.collaborators(), &route, &analysis));
    assert_eq!(harness.state.borrow().clicks.len(), 1);
}

#[test]
fn visibility_timeout_returns_false_after_minimap_nudge() {
    let player = Tile::new(100, 100, 0);
    let destination = Tile::new(102, 100, 0);
    let analysis = RouteAnalysis::new(destination, destination, None);

    let harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Door", &["Open"], destination)];
        state.unclickable = vec![ObjectId(1)];
        state.analysis = Some(analysis);
    }

    let route = vec![player, destination];
    assert!(!resolver().resolve(&harness.collaborators(), &route, &analysis));

    let state = harness.state.borrow();
    assert_eq!(state.minimap_clicks, vec![destination]);
    assert!(state.clicks.is_empty());
}

#[test]
fn locked_door_succeeds_exactly_on_the_through_tile() {
    let player = Tile::new(2566, 3356, 0);
    let through = Tile::new(2564, 3356, 0);
    let analysis = RouteAnalysis::new(player, Tile::new(2563, 3356, 0), None);
    let advanced = RouteAnalysis::new(through, Tile::new(2550, 3356, 0), None);

    let mut harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Door", &["Pick-lock"], Tile::new(2565, 3356, 0))];
        state.analysis = Some(analysis);
    }
    harness.on_click = Box::new(move |state, _, _| {
        // the second pick slips the lock and carries the agent through
        if state.clicks.len() >= 2 {
            state.player = through;
            state.analysis = Some(advanced);
        }
        true
    });

    let route = vec![player, through];
    assert!(resolver().resolve(&harness.collaborators(), &route, &analysis));
    assert_eq!(harness.state.borrow().clicks.len(), 2);
}

#[test]
fn locked_door_exhausts_its_attempt_ceiling() {
    let player = Tile::new(2566, 3356, 0);
    let analysis = RouteAnalysis::new(player, Tile::new(2563, 3356, 0), None);

    let harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Door", &["Pick-lock"], Tile::new(2565, 3356, 0))];
        state.analysis = Some(analysis);
    }

    let route = vec![player];
    assert!(!resolver().resolve(&harness.collaborators(), &route, &analysis));
    // door_attempts is pinned to 4 in the fast config
    assert_eq!(harness.state.borrow().clicks.len(), 4);
}

#[test]
fn closed_hatch_recurses_into_the_revealed_descend_object() {
    let player = Tile::new(200, 200, 0);
    let spot = Tile::new(201, 200, 0);
    let analysis = RouteAnalysis::new(spot, spot, Some(Tile::new(202, 200, 0)));
    let advanced = RouteAnalysis::new(spot, Tile::new(201, 200, 1), None);

    let hatch_two = object(2, "Trapdoor", &["Open", "Climb-down"], spot);
    let hatch_three = object(3, "Trapdoor", &["Climb-down"], spot);

    let mut harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Trapdoor", &["Open"], spot)];
        state.analysis = Some(analysis);
    }
    harness.on_click = Box::new(move |state, clicked, actions| {
        let action = actions.first().map(String::as_str).unwrap_or_default();
        match (clicked.id, action) {
            // the first open whiffs, but the opened hatch appears anyway
            (ObjectId(1), "Open") => {
                state.objects = vec![hatch_two.clone()];
                false
            }
            (ObjectId(2), "Open") => {
                state.objects = vec![hatch_three.clone()];
                true
            }
            (_, "Climb-down") => {
                state.analysis = Some(advanced);
                true
            }
            _ => true,
        }
    });

    let route = vec![player, spot];
    assert!(resolver().resolve(&harness.collaborators(), &route, &analysis));

    let state = harness.state.borrow();
    // three recursive invocations, under the depth cap of four
    assert_eq!(state.clicks.len(), 3);
    assert_eq!(state.clicks[0].1, vec!["Open".to_string()]);
    assert_eq!(state.clicks[2].1, vec!["Climb-down".to_string()]);
}

#[test]
fn gate_shortcut_walks_past_without_clicking() {
    let player = Tile::new(3028, 3312, 0);
    let gate = Tile::new(3031, 3314, 0);
    let analysis = RouteAnalysis::new(player, gate, Some(Tile::new(3032, 3314, 0)));

    let harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Gate", &["Close", "Open"], gate)];
        state.analysis = Some(analysis);
    }

    let route: Vec<Tile> = (0..15).map(|i| Tile::new(3020 + i, 3312, 0)).collect();
    assert!(resolver().resolve(&harness.collaborators(), &route, &analysis));

    let state = harness.state.borrow();
    assert!(state.clicks.is_empty());
    // nearest route tile is index 8; advancing 10 clamps to the last tile
    assert_eq!(state.walks, vec![Tile::new(3034, 3312, 0)]);
}

#[test]
fn timed_hazard_is_cleared_before_the_exit_click() {
    let player = Tile::new(2688, 10124, 0);
    let mouth = Tile::new(2690, 10125, 0);
    let analysis = RouteAnalysis::new(player, mouth, None);
    let advanced = RouteAnalysis::new(mouth, Tile::new(2695, 10125, 0), None);

    let mut harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Cave", &["Exit"], mouth)];
        state.npcs = vec![npc(1, "Boulder", &["Roll"], Tile::new(2689, 10125, 0))];
        state.analysis = Some(analysis);
    }
    harness.on_npc_click = Box::new(|state, _, _| {
        state.npcs.clear();
        true
    });
    harness.on_click = Box::new(move |state, _, _| {
        state.analysis = Some(advanced);
        true
    });

    let route = vec![player, mouth];
    assert!(resolver().resolve(&harness.collaborators(), &route, &analysis));

    let state = harness.state.borrow();
    assert_eq!(state.npc_clicks, vec![("Boulder".to_string(), "Roll".to_string())]);
    assert_eq!(state.clicks.len(), 1);
    assert_eq!(state.clicks[0], ("Cave".to_string(), vec!["Exit".to_string()]));
}

#[test]
fn barrier_cut_confirms_the_region_opened() {
    let player = Tile::new(3158, 3951, 0);
    let web_tile = Tile::new(3159, 3951, 0);
    let analysis = RouteAnalysis::new(player, Tile::new(3160, 3951, 0), None);
    let advanced = RouteAnalysis::new(web_tile, Tile::new(3170, 3951, 0), None);

    let mut harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Web", &["Slash"], web_tile)];
        state.tool_equipped = true;
        state.analysis = Some(analysis);
    }
    harness.on_click = Box::new(move |state, _, _| {
        state.objects.clear();
        state.analysis = Some(advanced);
        true
    });

    let route = vec![player, web_tile];
    assert!(resolver().resolve(&harness.collaborators(), &route, &analysis));

    let state = harness.state.borrow();
    assert_eq!(state.clicks[0], ("Web".to_string(), vec!["Slash".to_string()]));
}

#[test]
fn guarded_door_answers_the_access_quiz() {
    let player = Tile::new(150, 150, 0);
    let door_tile = Tile::new(151, 150, 0);
    let analysis = RouteAnalysis::new(player, door_tile, Some(Tile::new(152, 150, 0)));
    let advanced = RouteAnalysis::new(door_tile, Tile::new(160, 150, 0), None);

    let mut harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Rickety door", &["Open"], door_tile)];
        state.reachable = false;
        state.analysis = Some(analysis);
    }
    harness.on_click = Box::new(|state, _, _| {
        state.dialog_open = true;
        true
    });
    harness.on_advance = Box::new(move |state, offered| {
        state.dialog_open = false;
        state.analysis = Some(advanced);
        if let Some(first) = offered.first() {
            state.answered.push(first.to_string());
        }
    });

    let route = vec![player, door_tile];
    assert!(resolver().resolve(&harness.collaborators(), &route, &analysis));

    let state = harness.state.borrow();
    assert_eq!(state.answered[0], responses::ACCESS_QUIZ[0]);
}

#[test]
fn interrupting_dialog_is_answered_and_polling_continues() {
    let player = Tile::new(100, 100, 0);
    let destination = Tile::new(101, 100, 0);
    let analysis = RouteAnalysis::new(destination, destination, None);
    let advanced = RouteAnalysis::new(destination, Tile::new(110, 100, 0), None);

    let mut harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Door", &["Open"], destination)];
        state.analysis = Some(analysis);
    }
    harness.on_click = Box::new(|state, _, _| {
        state.dialog_open = true;
        true
    });
    harness.on_advance = Box::new(move |state, offered| {
        state.dialog_open = false;
        state.analysis = Some(advanced);
        if let Some(first) = offered.first() {
            state.answered.push(first.to_string());
        }
    });

    let route = vec![player, destination];
    assert!(resolver().resolve(&harness.collaborators(), &route, &analysis));
    assert_eq!(harness.state.borrow().answered, vec![responses::GENERAL[0].to_string()]);
}

#[test]
fn lingering_agent_gets_a_minimap_hover_toward_the_waypoint() {
    let player = Tile::new(100, 100, 0);
    let destination = Tile::new(101, 100, 0);
    let far = Tile::new(120, 100, 0);
    let analysis = RouteAnalysis::new(destination, destination, Some(Tile::new(102, 100, 0)));

    let harness = Harness::new(player);
    {
        let mut state = harness.state.borrow_mut();
        state.objects = vec![object(1, "Door", &["Open"], destination)];
        state.analysis = Some(analysis);
        state.lookahead = Some(RouteAnalysis::new(far, far, None));
    }

    let route = vec![player, destination];
    // no progress ever happens, so the attempt itself fails
    assert!(!resolver().resolve(&harness.collaborators(), &route, &analysis));

    let state = harness.state.borrow();
    assert!(state.hovers.contains(&far));
}
