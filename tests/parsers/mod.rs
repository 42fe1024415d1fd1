mod reference_integrity;
