//! Unit tests for buildings and city state.

#[cfg(test)]
mod footprint {
    use ca_core::Vec3f;

    use crate::Footprint;

    #[test]
    fn max_edges_are_exclusive() {
        let fp = Footprint::new(2, 2, 4, 5);
        assert!(fp.within(2, 2));
        assert!(fp.within(3, 4));
        assert!(!fp.within(4, 2));
        assert!(!fp.within(2, 5));
        assert!(!fp.within(1, 3));
    }

    #[test]
    fn points_use_their_cell() {
        let fp = Footprint::new(0, 0, 1, 1);
        assert!(fp.within_point(Vec3f::new(0.5, 0.9, 7.0)));
        assert!(!fp.within_point(Vec3f::new(1.0, 0.5, 0.0)));
        assert!(!fp.within_point(Vec3f::new(-0.1, 0.5, 0.0)));
    }
}

#[cfg(test)]
mod state {
    use ca_core::{AgentId, BuildingId, NavConfig, SampleId, TileCoord, Vec3f};
    use ca_map::TileMap;

    use crate::{CityError, CityState, Footprint, SoundCue};

    fn city() -> CityState {
        let map = TileMap::new(TileCoord::new(4, 4, 2)).unwrap();
        CityState::new(map, NavConfig::default())
    }

    #[test]
    fn add_and_lookup_building() {
        let mut city = city();
        let id = city
            .add_building("Senate", Footprint::new(0, 0, 2, 2), TileCoord::new(1, 1, 0))
            .unwrap();
        let b = city.building(id).unwrap();
        assert_eq!(b.name, "Senate");
        assert_eq!(b.crew_quarters, TileCoord::new(1, 1, 0));
        assert_eq!(city.buildings.at_point(Vec3f::new(1.5, 0.5, 0.5)).map(|b| b.id), Some(id));
        assert!(city.buildings.at_point(Vec3f::new(3.5, 3.5, 0.5)).is_none());
    }

    #[test]
    fn crew_quarters_must_be_on_map() {
        let mut city = city();
        let err = city
            .add_building("Nowhere", Footprint::new(0, 0, 1, 1), TileCoord::new(9, 0, 0))
            .unwrap_err();
        assert!(matches!(err, CityError::CrewQuartersOffMap { .. }));
    }

    #[test]
    fn unknown_building_is_an_error() {
        let city = city();
        assert!(matches!(
            city.building(BuildingId(3)),
            Err(CityError::BuildingNotFound(BuildingId(3)))
        ));
    }

    #[test]
    fn occupants_are_tracked_once() {
        let mut city = city();
        let id = city
            .add_building("Hotel", Footprint::new(0, 0, 1, 1), TileCoord::new(0, 0, 0))
            .unwrap();
        let agent = AgentId(1);

        city.admit_agent(id, agent).unwrap();
        city.admit_agent(id, agent).unwrap();
        assert_eq!(city.building(id).unwrap().occupants, vec![agent]);

        assert!(city.release_agent(id, agent).unwrap());
        assert!(!city.release_agent(id, agent).unwrap());
        assert!(city.building(id).unwrap().occupants.is_empty());
    }

    #[test]
    fn sound_cues_drain_in_order() {
        let mut city = city().with_teleport_sample(SampleId(7));
        assert_eq!(city.teleport_sample, Some(SampleId(7)));

        city.play_sample(SampleId(7), Vec3f::new(1.0, 1.0, 1.0));
        city.play_sample(SampleId(2), Vec3f::new(2.0, 2.0, 2.0));
        assert_eq!(city.pending_sounds().len(), 2);

        let drained = city.drain_sounds();
        assert_eq!(
            drained,
            vec![
                SoundCue { sample: SampleId(7), position: Vec3f::new(1.0, 1.0, 1.0) },
                SoundCue { sample: SampleId(2), position: Vec3f::new(2.0, 2.0, 2.0) },
            ]
        );
        assert!(city.pending_sounds().is_empty());
    }
}
