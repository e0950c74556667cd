//! Built-in order command catalogue
//!
//! [`definitions`] is the full reference used to seed a registry.
//! [`fallback_definitions`] is the small core set served when a catalogue
//! fails to load, so the overlay always has something to show.

use crate::types::{
    CommandCategory as C, CommandDefinition, ParameterDefinition as Param, ParameterType as P,
};

const STANCES: [&str; 7] = [
    "AGGRESSIVE",
    "DEFENSIVE",
    "EVASIVE",
    "PASSIVE",
    "SCREEN",
    "ESCORT",
    "HOLD",
];

const DIPLOMATIC_STATES: [&str; 6] = ["WAR", "PEACE", "NEUTRAL", "ALLIED", "TRADE", "VASSAL"];

const RESOURCES: [&str; 4] = ["ORE", "FUEL", "FOOD", "CREDITS"];

const HULL_SIZES: [&str; 6] = ["TINY", "SMALL", "MEDIUM", "LARGE", "HUGE", "TITAN"];

fn ship(description: &str) -> Param {
    Param::required("ship", P::Ship).with_description(description)
}

fn world(description: &str) -> Param {
    Param::required("world", P::World).with_description(description)
}

/// The complete built-in catalogue, in no particular order
pub fn definitions() -> Vec<CommandDefinition> {
    let mut all = Vec::with_capacity(40);
    all.extend(combat());
    all.extend(movement());
    all.extend(construction());
    all.extend(design());
    all.extend(resource());
    all.extend(administration());
    all
}

fn combat() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("FIRE", C::Combat, "FIRE <ship> <target> [salvos]")
            .with_description("Order a ship to open fire on a target in the same hex")
            .with_parameter(ship("Firing ship"))
            .with_parameter(
                Param::required("target", P::Ship).with_description("Ship to engage"),
            )
            .with_parameter(
                Param::new("salvos", P::Count).with_description("Number of salvos, default 1"),
            )
            .with_example("FIRE Vigilant Marauder")
            .with_example("FIRE Vigilant Marauder 3"),
        CommandDefinition::new("BOMBARD", C::Combat, "BOMBARD <ship> <world> [intensity]")
            .with_description("Bombard planetary defences from orbit")
            .with_parameter(ship("Ship in orbit"))
            .with_parameter(world("World to bombard"))
            .with_parameter(
                Param::new("intensity", P::Identifier)
                    .with_description("How much collateral damage to accept")
                    .with_valid_values(["LIGHT", "HEAVY", "TOTAL"]),
            )
            .with_example("BOMBARD Hammerfall Kestrel HEAVY"),
        CommandDefinition::new("INVADE", C::Combat, "INVADE <world> <ship> [count]")
            .with_description("Land troops carried by a ship on a hostile world")
            .with_parameter(world("Target world"))
            .with_parameter(ship("Transport carrying troops"))
            .with_parameter(
                Param::new("count", P::Count).with_description("Troops to land, default all"),
            )
            .with_example("INVADE Kestrel Longreach")
            .with_example("INVADE Kestrel Longreach 40"),
        CommandDefinition::new("AMBUSH", C::Combat, "AMBUSH <ship> <coordinate>")
            .with_description("Lie in wait at a hex and attack the first hostile ship to enter")
            .with_parameter(ship("Ambushing ship"))
            .with_parameter(
                Param::required("hex", P::Coordinate)
                    .with_description("Hex to watch")
                    .with_format("x,y"),
            )
            .with_example("AMBUSH Shade 12,7"),
        CommandDefinition::new("STANCE", C::Combat, "STANCE <ship> <stance>")
            .with_description("Set how a ship behaves when hostiles are present")
            .with_parameter(ship("Ship to configure"))
            .with_parameter(
                Param::required("stance", P::Identifier)
                    .with_description("Combat behaviour")
                    .with_valid_values(STANCES),
            )
            .with_example("STANCE Vigilant DEFENSIVE")
            .with_example("STANCE Shade EVASIVE"),
        CommandDefinition::new("RETREAT", C::Combat, "RETREAT <ship> [world]")
            .with_description("Break off combat and fall back toward a friendly world")
            .with_parameter(ship("Retreating ship"))
            .with_parameter(
                Param::new("world", P::World).with_description("Destination, default nearest"),
            )
            .with_example("RETREAT Vigilant")
            .with_example("RETREAT Vigilant Homeworld"),
    ]
}

fn movement() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("MOVE", C::Movement, "MOVE <ship> <coordinate>")
            .with_description("Move a ship to a hex at normal speed")
            .with_parameter(ship("Ship to move"))
            .with_parameter(
                Param::required("destination", P::Coordinate)
                    .with_description("Target hex")
                    .with_format("x,y"),
            )
            .with_example("MOVE Vigilant 10,4")
            .with_example("MOVE Pathfinder 3,15"),
        CommandDefinition::new("JUMP", C::Movement, "JUMP <ship> <world>")
            .with_description("Jump directly to a known world, consuming fuel")
            .with_parameter(ship("Jump-capable ship"))
            .with_parameter(world("Destination world"))
            .with_example("JUMP Pathfinder Longreach"),
        CommandDefinition::new("PATROL", C::Movement, "PATROL <ship> <coordinate> <coordinate>")
            .with_description("Shuttle a ship between two hexes every turn")
            .with_parameter(ship("Patrolling ship"))
            .with_parameter(
                Param::required("from", P::Coordinate)
                    .with_description("First waypoint")
                    .with_format("x,y"),
            )
            .with_parameter(
                Param::required("to", P::Coordinate)
                    .with_description("Second waypoint")
                    .with_format("x,y"),
            )
            .with_example("PATROL Sentinel 4,4 9,4"),
        CommandDefinition::new("TRANSIT", C::Movement, "TRANSIT <ship> <portal>")
            .with_description("Pass through a portal to its paired exit")
            .with_parameter(ship("Ship entering the portal"))
            .with_parameter(
                Param::required("portal", P::Portal).with_description("Portal in the current hex"),
            )
            .with_example("TRANSIT Pathfinder Gate-7"),
        CommandDefinition::new("NAVIGATE", C::Movement, "NAVIGATE <ship> <storm> <coordinate>")
            .with_description("Plot a course through an ion storm at reduced speed")
            .with_parameter(ship("Ship to navigate"))
            .with_parameter(
                Param::required("storm", P::Storm).with_description("Storm to cross"),
            )
            .with_parameter(
                Param::required("exit", P::Coordinate)
                    .with_description("Hex to exit the storm")
                    .with_format("x,y"),
            )
            .with_example("NAVIGATE Pathfinder Maelstrom 14,2"),
        CommandDefinition::new("FOLLOW", C::Movement, "FOLLOW <ship> <ship>")
            .with_description("Shadow another ship, matching its moves each turn")
            .with_parameter(ship("Following ship"))
            .with_parameter(
                Param::required("leader", P::Ship).with_description("Ship to follow"),
            )
            .with_example("FOLLOW Shade Marauder"),
    ]
}

fn construction() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("BUILD", C::Construction, "BUILD <world> <count> <shipclass>")
            .with_description("Build ships of a class at a world's shipyard")
            .with_parameter(world("World with a shipyard"))
            .with_parameter(
                Param::required("count", P::Count).with_description("Number of ships"),
            )
            .with_parameter(
                Param::required("class", P::ShipClass).with_description("Ship class to build"),
            )
            .with_example("BUILD Homeworld 5 Destroyer")
            .with_example("BUILD Longreach 1 Colony")
            .with_example("BUILD Homeworld 2 Freighter")
            .with_example("BUILD Kestrel 10 Fighter"),
        CommandDefinition::new("COLONIZE", C::Construction, "COLONIZE <ship> <world>")
            .with_description("Found a colony using a colony ship")
            .with_parameter(ship("Colony ship"))
            .with_parameter(world("Uninhabited world in the same hex"))
            .with_example("COLONIZE Seedling Verdance"),
        CommandDefinition::new("FORTIFY", C::Construction, "FORTIFY <world> <count>")
            .with_description("Add planetary defence batteries")
            .with_parameter(world("World to fortify"))
            .with_parameter(
                Param::required("count", P::Count).with_description("Batteries to build"),
            )
            .with_example("FORTIFY Homeworld 3"),
        CommandDefinition::new("SCRAP", C::Construction, "SCRAP <ship>")
            .with_description("Decommission a ship and recover part of its cost")
            .with_parameter(ship("Ship to scrap; must be at a friendly world"))
            .with_example("SCRAP Relic"),
        CommandDefinition::new("BUILDPORTAL", C::Construction, "BUILDPORTAL <world> <identifier>")
            .with_description("Construct a portal anchor at a world")
            .with_parameter(world("Anchor world"))
            .with_parameter(
                Param::required("name", P::Identifier).with_description("Name for the new portal"),
            )
            .with_example("BUILDPORTAL Homeworld Gate-9"),
    ]
}

fn design() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "DESIGN",
            C::Design,
            "DESIGN <identifier> <hull> <list>",
        )
        .with_description("Create a new ship class from a hull and components")
        .with_parameter(
            Param::required("class", P::Identifier).with_description("Name for the new class"),
        )
        .with_parameter(
            Param::required("hull", P::Identifier)
                .with_description("Hull size")
                .with_valid_values(HULL_SIZES),
        )
        .with_parameter(
            Param::required("components", P::List)
                .with_description("Components to fit, comma separated")
                .with_format("a,b,c"),
        )
        .with_parameter(
            Param::new("armor", P::Number).with_description("Armour plating rating, default 0"),
        )
        .with_example("DESIGN Lancer MEDIUM laser,laser,shield")
        .with_example("DESIGN Hauler LARGE cargo,cargo,engine 2")
        .with_example("DESIGN Picket TINY sensor"),
        CommandDefinition::new("REFIT", C::Design, "REFIT <ship> <shipclass>")
            .with_description("Refit an existing ship to a newer class")
            .with_parameter(ship("Ship to refit; must be at a shipyard"))
            .with_parameter(
                Param::required("class", P::ShipClass).with_description("Target class"),
            )
            .with_example("REFIT Vigilant Lancer"),
        CommandDefinition::new("RENAME", C::Design, "RENAME <ship> <identifier>")
            .with_description("Give a ship a new name")
            .with_parameter(ship("Ship to rename"))
            .with_parameter(
                Param::required("name", P::Identifier).with_description("New name"),
            )
            .with_example("RENAME Relic Phoenix"),
    ]
}

fn resource() -> Vec<CommandDefinition> {
    let resource_kind = || {
        Param::required("resource", P::Identifier)
            .with_description("Resource kind")
            .with_valid_values(RESOURCES)
    };

    vec![
        CommandDefinition::new(
            "TRANSFER",
            C::Resource,
            "TRANSFER <world> <world> <resource> <number>",
        )
        .with_description("Ship resources between two of your worlds")
        .with_parameter(world("Source world"))
        .with_parameter(
            Param::required("destination", P::World).with_description("Receiving world"),
        )
        .with_parameter(resource_kind())
        .with_parameter(Param::required("amount", P::Number).with_description("Units to move"))
        .with_example("TRANSFER Homeworld Longreach ORE 200"),
        CommandDefinition::new("LOAD", C::Resource, "LOAD <ship> <resource> [number]")
            .with_description("Load cargo onto a ship from the world it orbits")
            .with_parameter(ship("Ship with cargo space"))
            .with_parameter(resource_kind())
            .with_parameter(
                Param::new("amount", P::Number).with_description("Units to load, default all"),
            )
            .with_example("LOAD Hauler ORE 50"),
        CommandDefinition::new("LOADALL", C::Resource, "LOADALL <ship>")
            .with_description("Fill a ship's cargo hold with everything it can carry")
            .with_parameter(ship("Ship with cargo space"))
            .with_example("LOADALL Hauler"),
        CommandDefinition::new("UNLOAD", C::Resource, "UNLOAD <ship> [resource]")
            .with_description("Unload cargo onto the world a ship orbits")
            .with_parameter(ship("Ship carrying cargo"))
            .with_parameter(
                Param::new("resource", P::Identifier)
                    .with_description("Resource kind, default all")
                    .with_valid_values(RESOURCES),
            )
            .with_example("UNLOAD Hauler")
            .with_example("UNLOAD Hauler FUEL"),
        CommandDefinition::new("MINE", C::Resource, "MINE <ship> <storm>")
            .with_description("Harvest exotic particles from a storm")
            .with_parameter(ship("Mining ship"))
            .with_parameter(
                Param::required("storm", P::Storm).with_description("Storm in the current hex"),
            )
            .with_example("MINE Prospector Maelstrom"),
        CommandDefinition::new("BUY", C::Resource, "BUY <world> <resource> <number>")
            .with_description("Buy resources on the open market")
            .with_parameter(world("Trading world"))
            .with_parameter(resource_kind())
            .with_parameter(Param::required("amount", P::Number).with_description("Units to buy"))
            .with_example("BUY Homeworld FUEL 100"),
        CommandDefinition::new("SELL", C::Resource, "SELL <world> <resource> <number>")
            .with_description("Sell resources on the open market")
            .with_parameter(world("Trading world"))
            .with_parameter(resource_kind())
            .with_parameter(Param::required("amount", P::Number).with_description("Units to sell"))
            .with_example("SELL Longreach ORE 300"),
        CommandDefinition::new("GIFT", C::Resource, "GIFT <empire> <resource> <number>")
            .with_description("Give resources to another empire")
            .with_parameter(
                Param::required("empire", P::Empire).with_description("Receiving empire"),
            )
            .with_parameter(resource_kind())
            .with_parameter(Param::required("amount", P::Number).with_description("Units to give"))
            .with_example("GIFT Veyari CREDITS 500"),
    ]
}

fn administration() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("DECLARE", C::Administration, "DECLARE <empire> <status>")
            .with_description("Change your diplomatic status toward another empire")
            .with_parameter(
                Param::required("empire", P::Empire).with_description("Other empire"),
            )
            .with_parameter(
                Param::required("status", P::Identifier)
                    .with_description("New diplomatic status")
                    .with_valid_values(DIPLOMATIC_STATES),
            )
            .with_example("DECLARE Veyari PEACE")
            .with_example("DECLARE Korth WAR"),
        CommandDefinition::new("MESSAGE", C::Administration, "MESSAGE <empire> <text>")
            .with_description("Send a diplomatic message delivered at turn end")
            .with_parameter(
                Param::required("empire", P::Empire).with_description("Recipient empire"),
            )
            .with_parameter(
                Param::required("text", P::Identifier)
                    .with_description("Message text, rest of the line"),
            )
            .with_example("MESSAGE Veyari Shall we talk trade?"),
        CommandDefinition::new("NAME", C::Administration, "NAME <world> <identifier>")
            .with_description("Rename a world you control")
            .with_parameter(world("World to rename"))
            .with_parameter(
                Param::required("name", P::Identifier).with_description("New world name"),
            )
            .with_example("NAME Verdance NewHope"),
        CommandDefinition::new("RESEARCH", C::Administration, "RESEARCH <identifier> [number]")
            .with_description("Direct research funding toward a technology")
            .with_parameter(
                Param::required("technology", P::Identifier).with_description("Technology field"),
            )
            .with_parameter(
                Param::new("budget", P::Number).with_description("Credits per turn, default 10%"),
            )
            .with_example("RESEARCH Shields 200"),
        CommandDefinition::new("TAX", C::Administration, "TAX <world> <number>")
            .with_description("Set the tax rate on a world")
            .with_parameter(world("Taxed world"))
            .with_parameter(
                Param::required("rate", P::Number)
                    .with_description("Rate in percent")
                    .with_format("0-100"),
            )
            .with_example("TAX Homeworld 25"),
    ]
}

/// Minimal core set used when a catalogue cannot be loaded
pub fn fallback_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("BUILD", C::Construction, "BUILD <world> <count> <shipclass>")
            .with_description("Build ships at a world"),
        CommandDefinition::new("MOVE", C::Movement, "MOVE <ship> <coordinate>")
            .with_description("Move a ship to a hex"),
        CommandDefinition::new("FIRE", C::Combat, "FIRE <ship> <target>")
            .with_description("Attack a target in the same hex"),
        CommandDefinition::new("TRANSFER", C::Resource, "TRANSFER <world> <world> <resource> <number>")
            .with_description("Move resources between worlds"),
        CommandDefinition::new("DECLARE", C::Administration, "DECLARE <empire> <status>")
            .with_description("Change diplomatic status"),
    ]
}
