use bevy::prelude::*;

/// System sets for explicit ordering of item systems within a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Pulling new items out of their pools
    Spawning,
    /// Resolving catches into hit messages
    Collection,
    /// Applying rewards and playing cues
    Effects,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::app::App;

    #[test]
    fn test_game_set_derives_required_traits() {
        let spawning = GameSet::Spawning;
        assert_eq!(spawning, spawning.clone());
        assert_ne!(GameSet::Spawning, GameSet::Effects);

        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(GameSet::Spawning);
        set.insert(GameSet::Collection);
        set.insert(GameSet::Effects);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_game_set_ordering_chain() {
        let mut app = App::new();

        fn spawning_system() {}
        fn collection_system() {}
        fn effects_system() {}

        app.configure_sets(
            Update,
            (GameSet::Spawning, GameSet::Collection, GameSet::Effects).chain(),
        );

        app.add_systems(Update, spawning_system.in_set(GameSet::Spawning));
        app.add_systems(Update, collection_system.in_set(GameSet::Collection));
        app.add_systems(Update, effects_system.in_set(GameSet::Effects));

        // Run the app to ensure no scheduling conflicts
        app.update();
    }
}
