mod inference_flow_test;
