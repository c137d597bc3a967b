#[cfg(test)]
mod core_test {
    use crate::config::Config;
    use crate::device_camera::interface::ImageFrame;
    use crate::posture::classifier::Policy;
    use crate::posture::landmark::{Frame, Landmark};
    use crate::posture::state::{PostureState, SittingPosture};
    use crate::posture::synthetic::SideViewPose;
    use crate::posture_monitor::core::{init, transition, Effect, Event, Model};

    fn running() -> Model {
        Model::Running {
            status: None,
            frames_processed: 0,
        }
    }

    fn image() -> ImageFrame {
        ImageFrame {
            width: 2,
            height: 2,
            data: vec![0; 12],
        }
    }

    fn io_error(message: &str) -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(std::io::Error::new(std::io::ErrorKind::Other, message.to_string()))
    }

    #[test]
    fn test_init() {
        let (model, effects) = init();
        assert_eq!(model, Model::Starting);
        assert_eq!(effects, vec![Effect::StartCamera]);
    }

    #[test]
    fn test_camera_start() {
        let config = Config::default();

        let (model, effects) = transition(&config, Model::Starting, Event::CameraStartDone(Ok(())));
        assert_eq!(model, running());
        assert_eq!(effects, vec![Effect::CaptureFrame]);

        let (model, effects) = transition(
            &config,
            Model::Starting,
            Event::CameraStartDone(Err(io_error("no device"))),
        );
        assert!(matches!(&model, Model::Failed { reason } if reason.contains("no device")));
        assert!(matches!(effects.as_slice(), [Effect::LogError(m)] if m.contains("no device")));

        // a failed monitor ignores everything, including stop requests
        let (after, effects) = transition(&config, model.clone(), Event::StopRequested);
        assert_eq!(after, model);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_capture_flow() {
        let config = Config::default();

        let (model, effects) = transition(&config, running(), Event::FrameCaptureDone(Ok(image())));
        assert_eq!(model, running());
        assert_eq!(effects, vec![Effect::DetectLandmarks { image: image() }]);

        let (model, effects) = transition(
            &config,
            running(),
            Event::FrameCaptureDone(Err(io_error("usb reset"))),
        );
        assert_eq!(model, running());
        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], Effect::LogError(_)));
        assert_eq!(effects[1], Effect::CaptureFrame);
    }

    #[test]
    fn test_classified_frame_sets_status() {
        let config = Config::default();
        let frame = SideViewPose::new(100.0, 100.0, 150.0).frame();
        let state = PostureState::Sitting(SittingPosture::Incorrect);

        let (model, effects) = transition(
            &config,
            running(),
            Event::LandmarksDetected(Ok(Some(frame.clone()))),
        );

        assert_eq!(
            model,
            Model::Running {
                status: Some(state.status()),
                frames_processed: 1,
            }
        );
        assert_eq!(
            effects,
            vec![
                Effect::RenderSkeleton { frame: Some(frame) },
                Effect::SetStatus(state.status()),
                Effect::CaptureFrame,
            ]
        );
    }

    #[test]
    fn test_no_person_is_not_an_error() {
        let config = Config::default();
        let (_, effects) = transition(&config, running(), Event::LandmarksDetected(Ok(None)));
        assert_eq!(
            effects,
            vec![
                Effect::RenderSkeleton { frame: None },
                Effect::SetStatus(PostureState::NoPersonDetected.status()),
                Effect::CaptureFrame,
            ]
        );
    }

    #[test]
    fn test_calculation_error_keeps_previous_status() {
        let config = Config::default();
        let shown = PostureState::Standing.status();
        let model = Model::Running {
            status: Some(shown),
            frames_processed: 4,
        };
        let broken = Frame::new(vec![Landmark::new(0.5, 0.5, 1.0); 12]);

        let (model, effects) = transition(
            &config,
            model,
            Event::LandmarksDetected(Ok(Some(broken.clone()))),
        );

        match model {
            Model::Running {
                status,
                frames_processed,
            } => {
                assert_eq!(status, Some(shown));
                assert_eq!(frames_processed, 5);
            }
            other => panic!("Unexpected model {:?}", other),
        }
        assert_eq!(effects.len(), 3);
        assert_eq!(effects[0], Effect::RenderSkeleton { frame: Some(broken) });
        assert!(matches!(&effects[1], Effect::LogError(m) if m.contains("left_hip")));
        assert_eq!(effects[2], Effect::CaptureFrame);
    }

    #[test]
    fn test_calculation_error_on_first_frame_shows_error_status() {
        let config = Config::default();
        let broken = Frame::new(vec![]);

        let (model, effects) =
            transition(&config, running(), Event::LandmarksDetected(Ok(Some(broken))));

        let error_status = PostureState::CalculationError {
            reason: String::new(),
        }
        .status();
        assert!(matches!(model, Model::Running { status: Some(s), .. } if s == error_status));
        assert!(effects.contains(&Effect::SetStatus(error_status)));
    }

    #[test]
    fn test_detection_failure_skips_frame() {
        let config = Config::default();
        let (model, effects) = transition(
            &config,
            running(),
            Event::LandmarksDetected(Err(io_error("model crashed"))),
        );
        assert_eq!(model, running());
        assert!(matches!(effects[0], Effect::LogError(_)));
        assert_eq!(effects[1], Effect::CaptureFrame);
    }

    #[test]
    fn test_frame_limit_stops() {
        let config = Config {
            frame_limit: Some(1),
            ..Config::default()
        };
        let (model, effects) = transition(&config, running(), Event::LandmarksDetected(Ok(None)));
        assert_eq!(model, Model::Stopped);
        assert_eq!(effects.last(), Some(&Effect::StopCamera));
        assert!(!effects.contains(&Effect::CaptureFrame));
    }

    #[test]
    fn test_stop_requested() {
        let config = Config::default();
        let (model, effects) = transition(&config, running(), Event::StopRequested);
        assert_eq!(model, Model::Stopped);
        assert_eq!(effects, vec![Effect::StopCamera]);

        let (model, effects) = transition(&config, Model::Stopped, Event::StopRequested);
        assert_eq!(model, Model::Stopped);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_policy_comes_from_config() {
        let config = Config {
            policy: Policy::SingleAngle,
            thresholds: crate::posture::classifier::Thresholds::for_policy(Policy::SingleAngle),
            ..Config::default()
        };
        // standing legs, but the single-angle policy only sees the back
        let frame = SideViewPose::new(175.0, 175.0, 170.0).frame();

        let correct = PostureState::Sitting(SittingPosture::Correct).status();
        let (model, _) = transition(&config, running(), Event::LandmarksDetected(Ok(Some(frame))));
        assert!(matches!(
            model,
            Model::Running {
                status: Some(s),
                ..
            } if s == correct
        ));
    }

    #[test]
    fn test_unexpected_event_is_ignored() {
        let config = Config::default();
        let (model, effects) =
            transition(&config, Model::Starting, Event::FrameCaptureDone(Ok(image())));
        assert_eq!(model, Model::Starting);
        assert!(effects.is_empty());
    }
}
