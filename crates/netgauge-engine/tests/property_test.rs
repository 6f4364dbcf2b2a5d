mod property {
    mod detector_properties;
    mod history_properties;
}
